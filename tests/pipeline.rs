// BSD 3-Clause License
//
// Copyright (c) 2025, BlackPortal ○
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this
//    list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
//    this list of conditions and the following disclaimer in the documentation
//    and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its
//    contributors may be used to endorse or promote products derived from
//    this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use std::io::Write;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::NamedTempFile;

use intentml::algorithms::Knn;
use intentml::data::{SessionLoader, load_data, train_test_split_with_rng};
use intentml::metrics::evaluate;

const HEADER: &str = "Administrative,Administrative_Duration,Informational,\
Informational_Duration,ProductRelated,ProductRelated_Duration,BounceRates,ExitRates,\
PageValues,SpecialDay,Month,OperatingSystems,Browser,Region,TrafficType,VisitorType,\
Weekend,Revenue";

// Two well-separated session clusters: browsers that bounce quickly and
// never convert, and buyers with long product-page visits and high page
// values. Any 1-NN query lands in its own cluster.
fn fixture_csv() -> NamedTempFile {
    let mut content = String::from(HEADER);
    content.push('\n');
    for i in 0..10 {
        content.push_str(&format!(
            "0,0.0,0,0.0,1,{}.0,0.2,0.2,0.0,0.0,Feb,1,1,1,1,New_Visitor,FALSE,FALSE\n",
            10 + i
        ));
    }
    for i in 0..10 {
        content.push_str(&format!(
            "5,120.5,2,40.0,100,{}.0,0.0,0.01,50.0,0.0,Nov,2,2,3,2,Returning_Visitor,TRUE,TRUE\n",
            5000 + i
        ));
    }

    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write to temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

#[test]
fn pipeline_classifies_separated_clusters_perfectly() {
    let file = fixture_csv();
    let (features, labels) =
        load_data::<SessionLoader, _>(file.path()).expect("Failed to load fixture");
    assert_eq!(features.dim(), (20, 17));
    assert_eq!(labels.len(), 20);

    let (x_train, x_test, y_train, y_test) =
        train_test_split_with_rng(&features, &labels, 0.4, &mut StdRng::seed_from_u64(17))
            .expect("Failed to split fixture");
    assert_eq!(y_test.len(), 8);

    let mut model = Knn::new().k(1).build();
    model.fit(&x_train, &y_train).expect("Failed to fit");
    let predictions = model.predict(&x_test).expect("Failed to predict");

    let correct =
        predictions.iter().zip(y_test.iter()).filter(|(pred, actual)| pred == actual).count();
    assert_eq!(correct, y_test.len(), "Separated clusters must classify perfectly");

    let evaluation = evaluate(&y_test, &predictions).expect("Failed to evaluate");
    if y_test.iter().any(|&label| label == 1) {
        assert_eq!(evaluation.sensitivity, 1.0);
    }
    if y_test.iter().any(|&label| label == 0) {
        assert_eq!(evaluation.specificity, 1.0);
    }
}

#[test]
fn pipeline_is_deterministic_for_a_fixed_seed() {
    let file = fixture_csv();
    let (features, labels) =
        load_data::<SessionLoader, _>(file.path()).expect("Failed to load fixture");

    let run = |seed: u64| {
        let (x_train, x_test, y_train, y_test) =
            train_test_split_with_rng(&features, &labels, 0.4, &mut StdRng::seed_from_u64(seed))
                .expect("Failed to split fixture");
        let mut model = Knn::new().k(1).build();
        model.fit(&x_train, &y_train).expect("Failed to fit");
        let predictions = model.predict(&x_test).expect("Failed to predict");
        let evaluation = evaluate(&y_test, &predictions).expect("Failed to evaluate");
        (predictions, y_test, evaluation)
    };

    let (predictions_a, y_test_a, eval_a) = run(99);
    let (predictions_b, y_test_b, eval_b) = run(99);

    assert_eq!(predictions_a, predictions_b);
    assert_eq!(y_test_a, y_test_b);
    assert_eq!(eval_a.sensitivity.to_bits(), eval_b.sensitivity.to_bits());
    assert_eq!(eval_a.specificity.to_bits(), eval_b.specificity.to_bits());
}
