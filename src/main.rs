mod command_line_args;

use brute_arm::{
    find_frequent_itemsets_up_to, generate_rules_from_itemsets, read_grouped, Index, Item,
    Itemizer, Rule, TransactionReader,
};
use command_line_args::{parse_args_or_exit, Arguments};
use log::info;
use ordered_float::OrderedFloat;

use std::borrow::Cow;
use std::cmp::Reverse;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::process;
use std::time::Instant;

fn load_transactions(
    args: &Arguments,
    itemizer: &mut Itemizer,
) -> Result<Vec<Vec<Item>>, Box<dyn Error>> {
    if args.grouped {
        let reader = BufReader::new(File::open(&args.input_file_path)?);
        Ok(read_grouped(
            reader,
            &args.transaction_column,
            &args.item_column,
            itemizer,
        )?)
    } else {
        let reader = TransactionReader::open(&args.input_file_path, itemizer)?;
        Ok(reader.collect::<io::Result<Vec<Vec<Item>>>>()?)
    }
}

fn log_statistics(transactions: &[Vec<Item>], itemizer: &Itemizer) {
    let total_items: usize = transactions.iter().map(|t| t.len()).sum();
    let longest = transactions.iter().map(|t| t.len()).max().unwrap_or(0);
    let mean = if transactions.is_empty() {
        0.0
    } else {
        total_items as f64 / transactions.len() as f64
    };
    info!(
        "Loaded {} transactions over {} distinct items; mean length {:.2}, longest {}.",
        transactions.len(),
        itemizer.len(),
        mean,
        longest
    );
}

// Recomputes each rule's metrics from tid-lists; fails on any disagreement.
fn verify_rules(rules: &[Rule<Item>], transactions: &[Vec<Item>]) -> Result<(), Box<dyn Error>> {
    let mut index = Index::new();
    for transaction in transactions {
        index.insert(transaction);
    }
    for rule in rules {
        let ac = index.support(rule.merge().as_slice());
        let a = index.support(rule.antecedent.as_slice());
        let c = index.support(rule.consequent.as_slice());
        let agrees = (rule.support() - ac).abs() < 1e-9
            && (rule.confidence() - ac / a).abs() < 1e-9
            && (rule.lift() - ac / (a * c)).abs() < 1e-9;
        if !agrees {
            return Err(format!(
                "Rule {:?} => {:?} disagrees with index: support {}, confidence {}, lift {}",
                rule.antecedent,
                rule.consequent,
                ac,
                ac / a,
                ac / (a * c)
            )
            .into());
        }
    }
    info!("Verified {} rules against the transaction index.", rules.len());
    Ok(())
}

// Quotes a CSV field holding a comma or quote, doubling embedded quotes.
fn csv_field(field: &str) -> Cow<'_, str> {
    if field.contains(|c: char| c == ',' || c == '"') {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

// Highest lift first; ties stay in (antecedent, consequent) order.
fn sort_by_lift(rules: &mut [Rule<Item>]) {
    rules.sort_by_key(|rule| Reverse(OrderedFloat(rule.lift())));
}

fn write_rules(
    output: &mut dyn Write,
    rules: &[Rule<Item>],
    itemizer: &Itemizer,
) -> io::Result<()> {
    writeln!(output, "Antecedent->Consequent,Confidence,Lift,Support")?;
    for rule in rules {
        writeln!(
            output,
            "{},{},{},{}",
            csv_field(&rule.to_string(itemizer)),
            rule.confidence(),
            rule.lift(),
            rule.support()
        )?;
    }
    output.flush()
}

fn mine_brute_force(args: &Arguments) -> Result<(), Box<dyn Error>> {
    info!("Mining data set: {}", args.input_file_path);
    let start = Instant::now();

    let timer = Instant::now();
    let mut itemizer = Itemizer::new();
    let transactions = load_transactions(args, &mut itemizer)?;
    log_statistics(&transactions, &itemizer);
    info!("Loading took {} ms.", timer.elapsed().as_millis());

    info!("Counting all itemsets...");
    let timer = Instant::now();
    let itemsets = find_frequent_itemsets_up_to(
        transactions.iter().map(|t| t.iter().cloned()),
        args.min_support,
        args.max_length,
    )?;
    info!(
        "Found {} frequent itemsets in {} ms.",
        itemsets.len(),
        timer.elapsed().as_millis()
    );

    info!("Generating rules...");
    let timer = Instant::now();
    let mut rules = generate_rules_from_itemsets(&itemsets, args.min_confidence, args.min_lift)?
        .into_vec();
    info!(
        "Generated {} rules in {} ms.",
        rules.len(),
        timer.elapsed().as_millis()
    );

    if args.verify {
        verify_rules(&rules, &transactions)?;
    }

    sort_by_lift(&mut rules);
    if let Some(best) = rules.first() {
        info!(
            "Rule [{}] has the highest lift: {}",
            best.to_string(&itemizer),
            best.lift()
        );
    }

    match args.output_rules_path {
        Some(ref path) => {
            let mut output = BufWriter::new(File::create(path)?);
            write_rules(&mut output, &rules, &itemizer)?;
            info!("Wrote rules to {}", path);
        }
        None => {
            let stdout = io::stdout();
            let mut output = stdout.lock();
            write_rules(&mut output, &rules, &itemizer)?;
        }
    }

    info!("Total runtime: {} ms", start.elapsed().as_millis());

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let arguments = parse_args_or_exit();

    if let Err(err) = mine_brute_force(&arguments) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
