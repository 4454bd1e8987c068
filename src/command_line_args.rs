// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::env;
use std::io;
use std::process;

use argparse::{ArgumentParser, Store, StoreOption, StoreTrue};

#[derive(Debug)]
pub struct Arguments {
    pub input_file_path: String,
    pub output_rules_path: Option<String>,
    pub min_support: f64,
    pub min_confidence: f64,
    pub min_lift: Option<f64>,
    pub max_length: Option<usize>,
    pub grouped: bool,
    pub transaction_column: String,
    pub item_column: String,
    pub verify: bool,
}

impl Default for Arguments {
    fn default() -> Arguments {
        Arguments {
            input_file_path: String::new(),
            output_rules_path: None,
            min_support: 0.0,
            min_confidence: 0.0,
            min_lift: None,
            max_length: None,
            grouped: false,
            transaction_column: String::from("Invoice"),
            item_column: String::from("StockCode"),
            verify: false,
        }
    }
}

pub fn parse_args_or_exit() -> Arguments {
    let mut args = Arguments::default();

    {
        let mut parser = ArgumentParser::new();
        parser.set_description("Brute force frequent itemset and association rule mining.");

        parser
            .refer(&mut args.input_file_path)
            .add_option(
                &["--input"],
                Store,
                "Input dataset in CSV format. One transaction per line, \
                 unless --grouped is given.",
            )
            .metavar("file_path")
            .required();

        parser
            .refer(&mut args.output_rules_path)
            .add_option(
                &["--output"],
                StoreOption,
                "File path in which to store output rules, stdout if omitted. \
                 Format: antecedent -> consequent, confidence, lift, support.",
            )
            .metavar("file_path");

        parser
            .refer(&mut args.min_support)
            .add_option(
                &["--min-support"],
                Store,
                "Minimum itemset support threshold, in range [0,1].",
            )
            .metavar("threshold")
            .required();

        parser
            .refer(&mut args.min_confidence)
            .add_option(
                &["--min-confidence"],
                Store,
                "Minimum rule confidence threshold, in range [0,1].",
            )
            .metavar("threshold")
            .required();

        parser
            .refer(&mut args.min_lift)
            .add_option(
                &["--min-lift"],
                StoreOption,
                "Minimum rule lift threshold, in range [1,∞].",
            )
            .metavar("threshold");

        parser
            .refer(&mut args.max_length)
            .add_option(
                &["--max-length"],
                StoreOption,
                "Only count itemsets of at most this many items.",
            )
            .metavar("length");

        parser.refer(&mut args.grouped).add_option(
            &["--grouped"],
            StoreTrue,
            "Input is a CSV with a header row and one (transaction, item) record per row.",
        );

        parser
            .refer(&mut args.transaction_column)
            .add_option(
                &["--transaction-column"],
                Store,
                "With --grouped, the column holding the transaction id (default Invoice).",
            )
            .metavar("name");

        parser
            .refer(&mut args.item_column)
            .add_option(
                &["--item-column"],
                Store,
                "With --grouped, the column holding the item (default StockCode).",
            )
            .metavar("name");

        parser.refer(&mut args.verify).add_option(
            &["--verify"],
            StoreTrue,
            "Recompute every rule's metrics from a transaction id index and fail on mismatch.",
        );

        if env::args().count() == 1 {
            parser.print_help("Usage:", &mut io::stderr()).ok();
            process::exit(1);
        }

        if let Err(code) = parser.parse_args() {
            process::exit(code);
        }
    }

    if let Err(message) = validate(&args) {
        eprintln!("{}", message);
        process::exit(1);
    }

    args
}

pub fn validate(args: &Arguments) -> Result<(), String> {
    if !(0.0..=1.0).contains(&args.min_support) {
        return Err("Minimum itemset support must be in range [0,1]".to_owned());
    }

    if !(0.0..=1.0).contains(&args.min_confidence) {
        return Err("Minimum rule confidence threshold must be in range [0,1]".to_owned());
    }

    if let Some(min_lift) = args.min_lift {
        if !(min_lift >= 1.0) {
            return Err("Minimum lift must be in range [1,∞]".to_owned());
        }
    }

    if args.max_length == Some(0) {
        return Err("Maximum itemset length must be at least 1".to_owned());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate, Arguments};

    fn args(min_support: f64, min_confidence: f64) -> Arguments {
        Arguments {
            input_file_path: String::from("data.csv"),
            min_support,
            min_confidence,
            ..Arguments::default()
        }
    }

    #[test]
    fn test_validate() {
        assert!(validate(&args(0.6, 1.0)).is_ok());
        assert!(validate(&args(0.0, 0.0)).is_ok());
        assert!(validate(&args(1.2, 0.5)).is_err());
        assert!(validate(&args(0.5, -0.5)).is_err());

        let mut a = args(0.1, 0.2);
        a.min_lift = Some(0.5);
        assert!(validate(&a).is_err());
        a.min_lift = Some(1.0);
        assert!(validate(&a).is_ok());
        a.max_length = Some(0);
        assert!(validate(&a).is_err());
        a.max_length = Some(4);
        assert!(validate(&a).is_ok());
    }
}
