#![allow(dead_code)]

extern crate quarry_core as quarry;

use quarry::prelude::*;
use quarry_derive::Object;

#[derive(Object)]
struct Row {
    value: List<String>,
}

fn main() {
    let _ = Query::<Row>::new()
        .field(Row::VALUE)
        .keys();
}
