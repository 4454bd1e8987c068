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

use crate::item::Item;
use crate::itemizer::Itemizer;
use fnv::FnvHashMap;
use std::fs::File;
use std::io::prelude::*;
use std::io::{self, BufReader};

/// Reads one transaction per line, items separated by commas. Blank lines
/// are skipped and repeated items within a line are removed.
pub struct TransactionReader<'a, R> {
    reader: R,
    itemizer: &'a mut Itemizer,
}

impl<'a> TransactionReader<'a, BufReader<File>> {
    pub fn open(path: &str, itemizer: &'a mut Itemizer) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(TransactionReader::new(BufReader::new(file), itemizer))
    }
}

impl<'a, R: BufRead> TransactionReader<'a, R> {
    pub fn new(reader: R, itemizer: &'a mut Itemizer) -> TransactionReader<'a, R> {
        TransactionReader { reader, itemizer }
    }
}

impl<'a, R: BufRead> Iterator for TransactionReader<'a, R> {
    type Item = io::Result<Vec<Item>>;
    fn next(&mut self) -> Option<io::Result<Vec<Item>>> {
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(err) => return Some(Err(err)),
            }
            let mut splits = split_record(&line)
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(|s| self.itemizer.id_of(s))
                .collect::<Vec<Item>>();

            // Some input files have transactions with duplicates items.
            // Remove any duplicates here.
            splits.sort();
            splits.dedup();

            if !splits.is_empty() {
                return Some(Ok(splits));
            }
        }
    }
}

/// Reads a CSV file with a header row, one (transaction id, item) record
/// per row, and groups the items of each transaction id together.
/// Transactions come back in order of their id's first appearance.
pub fn read_grouped<R: BufRead>(
    reader: R,
    transaction_column: &str,
    item_column: &str,
    itemizer: &mut Itemizer,
) -> io::Result<Vec<Vec<Item>>> {
    let mut lines = reader.lines();
    let header = match lines.next() {
        Some(line) => line?,
        None => return Err(invalid_data("Missing header row".to_owned())),
    };
    let header = split_record(&header);
    let column = |name: &str| {
        header
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| invalid_data(format!("No column named '{}'", name)))
    };
    let tid_index = column(transaction_column)?;
    let item_index = column(item_column)?;

    let mut tid_to_index: FnvHashMap<String, usize> = FnvHashMap::default();
    let mut transactions: Vec<Vec<Item>> = vec![];
    for (line_number, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_record(&line);
        let (tid, item) = match (fields.get(tid_index), fields.get(item_index)) {
            (Some(tid), Some(item)) => (tid.trim(), item.trim()),
            _ => {
                return Err(invalid_data(format!(
                    "Line {}: expected at least {} fields",
                    line_number + 2,
                    tid_index.max(item_index) + 1
                )))
            }
        };
        if item.is_empty() {
            continue;
        }
        let next_index = transactions.len();
        let index = *tid_to_index.entry(tid.to_owned()).or_insert(next_index);
        if index == next_index {
            transactions.push(vec![]);
        }
        transactions[index].push(itemizer.id_of(item));
    }

    for transaction in transactions.iter_mut() {
        transaction.sort();
        transaction.dedup();
    }
    Ok(transactions)
}

fn invalid_data(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

// Splits a CSV record on commas, honouring double-quoted fields and "" escapes.
fn split_record(line: &str) -> Vec<String> {
    let line = line.trim_end_matches(|c| c == '\n' || c == '\r');
    let mut fields = vec![];
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::replace(&mut field, String::new())),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}
