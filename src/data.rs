use crate::{EvalError, EvalResult, Evaluator};
use ordered_float::OrderedFloat;
use std::ops::Deref;
use std::str::SplitWhitespace;

/// An observation: the input `x` and the actual value `y`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
}

/// Points kept sorted by `x`, in non-decreasing order.
///
/// The only mutation is `insert`, so the order holds after every call. Several points can share
/// the same `x`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct PointStore {
    points: Vec<Point>,
}

impl PointStore {
    pub fn new() -> Self {
        PointStore { points: Vec::new() }
    }

    /// Build a store from unsorted points.
    ///
    /// The sort is stable, so points with the same `x` keep their relative order.
    pub fn from_points(mut points: Vec<Point>) -> Self {
        points.sort_by_key(|point| OrderedFloat::from(point.x));
        PointStore { points }
    }

    /// Insert a point at the position keeping the store sorted.
    ///
    /// Points after the last one or before the first one are appended or prepended directly.
    /// Otherwise we binary search the first point with an `x` greater or equal, and the new point
    /// goes just before it.
    ///
    /// The order is the one of `OrderedFloat`, like `from_points`: a NaN `x` goes last.
    pub fn insert(&mut self, x: f64, y: f64) {
        let point = Point::new(x, y);
        let key = OrderedFloat::from(x);
        let position = match (self.points.first(), self.points.last()) {
            (None, _) | (_, None) => 0,
            (_, Some(last)) if key >= OrderedFloat::from(last.x) => self.points.len(),
            (Some(first), _) if key < OrderedFloat::from(first.x) => 0,
            _ => self
                .points
                .partition_point(|p| OrderedFloat::from(p.x) < key),
        };
        self.points.insert(position, point);
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}

// With Deref we can use len(), is_empty(), iter(), first()... directly on the store.
impl Deref for PointStore {
    type Target = [Point];
    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

/// Util for parsing the evaluation input into an evaluator.
///
/// The input is a list of whitespace separated tokens: the number of points `N`, then `N` pairs
/// `x y`, then the number of models `P`, then `P` pairs `slope intercept`. Everything after the
/// last model is ignored.
pub fn parse_input(data: &str) -> EvalResult<Evaluator> {
    let mut tokens = Tokens::new(data);
    let mut evaluator = Evaluator::new();

    let n_points = tokens.next_count("points")?;
    for _ in 0..n_points {
        let x = tokens.next_number("x")?;
        let y = tokens.next_number("y")?;
        if x.is_nan() {
            return Err(EvalError::InvalidInput(format!(
                "x must be a number, got NaN at token {}",
                tokens.position
            )));
        }
        evaluator.add_data_point(x, y);
    }

    let n_models = tokens.next_count("models")?;
    for _ in 0..n_models {
        let slope = tokens.next_number("slope")?;
        let intercept = tokens.next_number("intercept")?;
        evaluator.add_model(slope, intercept);
    }
    Ok(evaluator)
}

/// Tokenizer keeping track of the position, for the error messages.
struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(data: &'a str) -> Self {
        Tokens {
            inner: data.split_whitespace(),
            position: 0,
        }
    }

    fn next_token(&mut self, what: &str) -> EvalResult<&'a str> {
        self.position += 1;
        self.inner.next().ok_or_else(|| {
            EvalError::InvalidInput(format!(
                "unexpected end of input, expected {} at token {}",
                what, self.position
            ))
        })
    }

    fn next_number(&mut self, what: &str) -> EvalResult<f64> {
        let token = self.next_token(what)?;
        token.parse().map_err(|_| {
            EvalError::InvalidInput(format!(
                "expected a number for {} at token {}, got {:?}",
                what, self.position, token
            ))
        })
    }

    /// A strictly positive count of points or models.
    fn next_count(&mut self, what: &str) -> EvalResult<usize> {
        let token = self.next_token(what)?;
        let count: i64 = token.parse().map_err(|_| {
            EvalError::InvalidInput(format!(
                "expected the number of {} at token {}, got {:?}",
                what, self.position, token
            ))
        })?;
        if count <= 0 {
            return Err(EvalError::InvalidInput(format!(
                "number of {} must be greater than zero",
                what
            )));
        }
        Ok(count as usize)
    }
}
