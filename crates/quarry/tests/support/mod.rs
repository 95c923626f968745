use quarry::{
    Error,
    session::PredicateEngine,
    traits::Object,
    value::{Record, Value},
};
use std::cmp::Ordering;

///
/// MemoryEngine
///
/// In-memory engine understanding conjunctions of `<path> <op> %@`.
/// Anything else is reported as unsupported.
///

#[derive(Default)]
pub struct MemoryEngine {
    rows: Vec<Record>,
}

impl MemoryEngine {
    pub fn insert<O: Object>(&mut self, object: &O) {
        self.rows.push(object.to_record());
    }
}

impl PredicateEngine for MemoryEngine {
    type Output = Vec<Record>;

    fn execute(&self, predicate: &str, arguments: &[Value]) -> Result<Vec<Record>, Error> {
        let clauses = parse(predicate, arguments)?;

        Ok(self
            .rows
            .iter()
            .filter(|row| clauses.iter().all(|clause| clause.matches(row)))
            .cloned()
            .collect())
    }
}

#[derive(Clone, Copy)]
enum Op {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
}

struct Clause {
    path: Vec<String>,
    op: Op,
    value: Value,
}

impl Clause {
    fn matches(&self, row: &Record) -> bool {
        let Some(actual) = lookup(row, &self.path) else {
            return false;
        };

        match self.op {
            Op::Eq => actual == &self.value,
            Op::Ne => actual != &self.value,
            Op::Lt => order(actual, &self.value) == Some(Ordering::Less),
            Op::Lte => matches!(
                order(actual, &self.value),
                Some(Ordering::Less | Ordering::Equal)
            ),
            Op::Gt => order(actual, &self.value) == Some(Ordering::Greater),
            Op::Gte => matches!(
                order(actual, &self.value),
                Some(Ordering::Greater | Ordering::Equal)
            ),
        }
    }
}

fn parse(predicate: &str, arguments: &[Value]) -> Result<Vec<Clause>, Error> {
    let mut arguments = arguments.iter();

    predicate
        .split(" && ")
        .map(|clause| {
            let parts: Vec<&str> = clause.split(' ').collect();
            let [path, op, "%@"] = parts.as_slice() else {
                return Err(Error::engine_unsupported(format!(
                    "unsupported clause '{clause}'"
                )));
            };

            let op = match *op {
                "==" => Op::Eq,
                "!=" => Op::Ne,
                "<" => Op::Lt,
                "<=" => Op::Lte,
                ">" => Op::Gt,
                ">=" => Op::Gte,
                other => {
                    return Err(Error::engine_unsupported(format!(
                        "unsupported operator '{other}'"
                    )));
                }
            };

            let value = arguments
                .next()
                .cloned()
                .ok_or_else(|| Error::engine("fewer arguments than placeholders"))?;

            Ok(Clause {
                path: path.split('.').map(str::to_string).collect(),
                op,
                value,
            })
        })
        .collect()
}

fn lookup<'a>(row: &'a Record, path: &[String]) -> Option<&'a Value> {
    let (first, rest) = path.split_first()?;
    let mut value = row.get(first)?;

    for segment in rest {
        value = value.as_record()?.get(segment)?;
    }

    Some(value)
}

fn order(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Uint(a), Value::Uint(b)) => Some(a.cmp(b)),
        (Value::Float32(a), Value::Float32(b)) => a.partial_cmp(b),
        (Value::Float64(a), Value::Float64(b)) => a.partial_cmp(b),
        (Value::Decimal(a), Value::Decimal(b)) => Some(a.cmp(b)),
        (Value::Timestamp(a), Value::Timestamp(b)) => Some(a.cmp(b)),
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        _ => None,
    }
}
