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

use std::env;
use std::error::Error;
use std::process;

use log::{debug, info};

use intentml::algorithms::Knn;
use intentml::data::{SessionLoader, load_data, train_test_split};
use intentml::metrics::evaluate;

const TEST_FRACTION: f64 = 0.4;
const NEIGHBORS: usize = 1;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: intentml <sessions.csv>");
        process::exit(2);
    }

    if let Err(e) = run(&args[1]) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(path: &str) -> Result<(), Box<dyn Error>> {
    let (features, labels) = load_data::<SessionLoader, _>(path)?;
    info!("loaded {} sessions from {}", labels.len(), path);

    let (x_train, x_test, y_train, y_test) = train_test_split(&features, &labels, TEST_FRACTION)?;
    debug!("split into {} training and {} test sessions", y_train.len(), y_test.len());

    let mut model = Knn::new().k(NEIGHBORS).build();
    model.fit(&x_train, &y_train)?;
    let predictions = model.predict(&x_test)?;

    let correct =
        predictions.iter().zip(y_test.iter()).filter(|(pred, actual)| pred == actual).count();
    let incorrect = y_test.len() - correct;
    let evaluation = evaluate(&y_test, &predictions)?;

    println!("Correct: {correct}");
    println!("Incorrect: {incorrect}");
    println!("True Positive Rate: {:.2}%", 100.0 * evaluation.sensitivity);
    println!("True Negative Rate: {:.2}%", 100.0 * evaluation.specificity);
    Ok(())
}
