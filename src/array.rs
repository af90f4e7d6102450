//! Array composition layer: vectors and matrices of dual numbers.
//!
//! A thin convenience layer over the scalar algebra. Elements are plain
//! [`DualNumber`]s with no extra invariants; shape bookkeeping is the only
//! thing these containers add. All element-wise work is sequential; callers
//! own the arrays they pass in and get back.

use std::fmt;

use rand::Rng;

use crate::dual::{AdError, AdResult, DualNumber};

/// A vector of dual numbers.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DualVector {
    /// The elements, owned by the caller's container.
    pub elements: Vec<DualNumber>,
}

impl DualVector {
    /// Wrap a vector of duals.
    pub fn new(elements: Vec<DualNumber>) -> Self {
        Self { elements }
    }

    /// Lift a slice of plain scalars to dual constants.
    pub fn constants(values: &[f64]) -> Self {
        Self::new(values.iter().map(|&v| DualNumber::constant(v)).collect())
    }

    /// Lift a slice of plain scalars to independent variables (seed 1 each).
    pub fn variables(values: &[f64]) -> Self {
        Self::new(values.iter().map(|&v| DualNumber::variable(v)).collect())
    }

    /// Rebuild a dual vector from separately extracted value and derivative
    /// components.
    pub fn from_components(values: &[f64], derivs: &[f64]) -> AdResult<Self> {
        if values.len() != derivs.len() {
            return Err(AdError::DimensionMismatch {
                expected: values.len(),
                got: derivs.len(),
            });
        }
        Ok(Self::new(
            values
                .iter()
                .zip(derivs.iter())
                .map(|(&v, &d)| DualNumber::new(v, d))
                .collect(),
        ))
    }

    /// A vector of independent uniform samples in [0, 1), all constants
    /// (derivative 0): random data, not differentiation variables.
    pub fn rand(len: usize, rng: &mut impl Rng) -> Self {
        Self::new(
            (0..len)
                .map(|_| DualNumber::constant(rng.gen::<f64>()))
                .collect(),
        )
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DualNumber> {
        self.elements.get(index)
    }

    /// Project the value component of every element.
    pub fn values(&self) -> Vec<f64> {
        self.elements.iter().map(|d| d.value).collect()
    }

    /// Project the derivative component of every element.
    pub fn derivs(&self) -> Vec<f64> {
        self.elements.iter().map(|d| d.deriv).collect()
    }

    /// Element-wise application of an infallible scalar operation.
    pub fn map<F>(&self, f: F) -> DualVector
    where
        F: Fn(&DualNumber) -> DualNumber,
    {
        DualVector::new(self.elements.iter().map(f).collect())
    }

    /// Element-wise application of a fallible scalar operation.
    pub fn try_map<F>(&self, f: F) -> AdResult<DualVector>
    where
        F: Fn(&DualNumber) -> AdResult<DualNumber>,
    {
        let mut out = Vec::with_capacity(self.len());
        for e in &self.elements {
            out.push(f(e)?);
        }
        Ok(DualVector::new(out))
    }

    /// Sum of all elements, folded from the additive identity.
    pub fn sum(&self) -> DualNumber {
        self.elements.iter().copied().sum()
    }

    /// Element-wise addition.
    pub fn add(&self, other: &DualVector) -> AdResult<DualVector> {
        self.zip_check(other)?;
        Ok(DualVector::new(
            self.elements
                .iter()
                .zip(other.elements.iter())
                .map(|(&a, &b)| a + b)
                .collect(),
        ))
    }

    /// Element-wise subtraction.
    pub fn sub(&self, other: &DualVector) -> AdResult<DualVector> {
        self.zip_check(other)?;
        Ok(DualVector::new(
            self.elements
                .iter()
                .zip(other.elements.iter())
                .map(|(&a, &b)| a - b)
                .collect(),
        ))
    }

    /// Dual scalar times dual vector.
    pub fn scale(&self, c: &DualNumber) -> DualVector {
        self.map(|e| *e * *c)
    }

    /// Plain scalar times dual vector.
    pub fn scale_f64(&self, s: f64) -> DualVector {
        self.map(|e| *e * s)
    }

    /// Dual scalar times plain array, producing a dual vector of the same
    /// shape.
    pub fn scale_slice(values: &[f64], c: &DualNumber) -> DualVector {
        DualVector::new(values.iter().map(|&v| *c * v).collect())
    }

    /// Plain scalar times plain array, lifted to a dual vector.
    pub fn scale_slice_f64(values: &[f64], s: f64) -> DualVector {
        DualVector::new(
            values
                .iter()
                .map(|&v| DualNumber::constant(v * s))
                .collect(),
        )
    }

    /// View this vector as a 1×n row matrix (the transpose of the column
    /// interpretation). Element values are untouched.
    pub fn transpose(&self) -> DualMatrix {
        DualMatrix {
            elements: self.elements.clone(),
            rows: 1,
            cols: self.len(),
        }
    }

    /// Dot product under dual arithmetic: transpose(A)·B reduced to its
    /// single entry, i.e. Σ aᵢ·bᵢ with the product rule per term.
    pub fn dot(&self, other: &DualVector) -> AdResult<DualNumber> {
        self.zip_check(other)?;
        let row = self.transpose();
        let product = row.matvec(other)?;
        Ok(product.elements[0])
    }

    /// Dot product against a plain vector, lifted element-wise.
    pub fn dot_values(&self, other: &[f64]) -> AdResult<DualNumber> {
        self.dot(&DualVector::constants(other))
    }

    /// The p-norm. Only the Euclidean norm (p = 2) is supported:
    /// √(A·A). Any other p fails with
    /// [`AdError::UnsupportedOperation`].
    pub fn norm(&self, p: f64) -> AdResult<DualNumber> {
        if p != 2.0 {
            return Err(AdError::UnsupportedOperation(format!(
                "norm with p = {p}; only the Euclidean norm (p = 2) is supported"
            )));
        }
        let sum_sq = self.dot(self)?;
        if sum_sq.value == 0.0 {
            // norm of the zero vector is exactly zero; sqrt guards at zero
            return Ok(DualNumber::zero());
        }
        sum_sq.sqrt()
    }

    fn zip_check(&self, other: &DualVector) -> AdResult<()> {
        if self.len() != other.len() {
            return Err(AdError::DimensionMismatch {
                expected: self.len(),
                got: other.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for DualVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, e) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", e)?;
        }
        write!(f, "]")
    }
}

/// A row-major matrix of dual numbers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DualMatrix {
    elements: Vec<DualNumber>,
    rows: usize,
    cols: usize,
}

impl DualMatrix {
    /// Wrap a row-major element vector with the given dimensions.
    pub fn new(rows: usize, cols: usize, elements: Vec<DualNumber>) -> AdResult<Self> {
        if elements.len() != rows * cols {
            return Err(AdError::DimensionMismatch {
                expected: rows * cols,
                got: elements.len(),
            });
        }
        Ok(Self {
            elements,
            rows,
            cols,
        })
    }

    /// Lift a row-major slice of plain scalars to dual constants.
    pub fn constants(rows: usize, cols: usize, values: &[f64]) -> AdResult<Self> {
        Self::new(
            rows,
            cols,
            values.iter().map(|&v| DualNumber::constant(v)).collect(),
        )
    }

    /// Rebuild a dual matrix from separately extracted value and derivative
    /// components (both row-major).
    pub fn from_components(
        rows: usize,
        cols: usize,
        values: &[f64],
        derivs: &[f64],
    ) -> AdResult<Self> {
        if values.len() != derivs.len() {
            return Err(AdError::DimensionMismatch {
                expected: values.len(),
                got: derivs.len(),
            });
        }
        Self::new(
            rows,
            cols,
            values
                .iter()
                .zip(derivs.iter())
                .map(|(&v, &d)| DualNumber::new(v, d))
                .collect(),
        )
    }

    /// A rows×cols matrix of independent uniform samples in [0, 1), all
    /// constants (derivative 0).
    pub fn rand(rows: usize, cols: usize, rng: &mut impl Rng) -> Self {
        Self {
            elements: (0..rows * cols)
                .map(|_| DualNumber::constant(rng.gen::<f64>()))
                .collect(),
            rows,
            cols,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&DualNumber> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.elements.get(row * self.cols + col)
    }

    /// Project the value component, row-major, shape preserved.
    pub fn values(&self) -> Vec<f64> {
        self.elements.iter().map(|d| d.value).collect()
    }

    /// Project the derivative component, row-major, shape preserved.
    pub fn derivs(&self) -> Vec<f64> {
        self.elements.iter().map(|d| d.deriv).collect()
    }

    /// Dual scalar times dual matrix.
    pub fn scale(&self, c: &DualNumber) -> DualMatrix {
        DualMatrix {
            elements: self.elements.iter().map(|&e| e * *c).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Plain scalar times dual matrix.
    pub fn scale_f64(&self, s: f64) -> DualMatrix {
        DualMatrix {
            elements: self.elements.iter().map(|&e| e * s).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Dual scalar times plain row-major array, producing a dual matrix of
    /// the same shape.
    pub fn scale_slice(rows: usize, cols: usize, values: &[f64], c: &DualNumber) -> AdResult<Self> {
        Self::new(rows, cols, values.iter().map(|&v| *c * v).collect())
    }

    /// Plain scalar times plain row-major array, lifted to a dual matrix.
    pub fn scale_slice_f64(rows: usize, cols: usize, values: &[f64], s: f64) -> AdResult<Self> {
        Self::new(
            rows,
            cols,
            values
                .iter()
                .map(|&v| DualNumber::constant(v * s))
                .collect(),
        )
    }

    /// Transpose: permutes indices only, individual duals are untouched.
    pub fn transpose(&self) -> DualMatrix {
        let mut elements = Vec::with_capacity(self.elements.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                elements.push(self.elements[row * self.cols + col]);
            }
        }
        DualMatrix {
            elements,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Matrix-vector product under dual arithmetic. Each output element is
    /// the dot of one row with the vector, summed from the additive
    /// identity.
    pub fn matvec(&self, v: &DualVector) -> AdResult<DualVector> {
        if self.cols != v.len() {
            return Err(AdError::DimensionMismatch {
                expected: self.cols,
                got: v.len(),
            });
        }
        let mut out = Vec::with_capacity(self.rows);
        for row in 0..self.rows {
            let start = row * self.cols;
            let entry: DualNumber = self.elements[start..start + self.cols]
                .iter()
                .zip(v.elements.iter())
                .map(|(&m, &x)| m * x)
                .sum();
            out.push(entry);
        }
        Ok(DualVector::new(out))
    }
}
