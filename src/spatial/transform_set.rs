//! Ordered collection of weighted transforms
//!
//! A transform's position in the set is its identity: output geometry is
//! labeled with it and the presentation layer colors by it. Editing a
//! parameter never moves a transform.

use ndarray::Array2;

use crate::io::error::{Result, invalid_parameter};
use crate::math::affine::{AffineTransform, Parameter};
use crate::math::probability::uniform_weights;

/// Ordered, mutable set of transforms owned by the caller
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformSet {
    transforms: Vec<AffineTransform>,
}

impl TransformSet {
    /// Create an empty set
    pub const fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Create a set from transforms in index order
    pub const fn from_transforms(transforms: Vec<AffineTransform>) -> Self {
        Self { transforms }
    }

    /// Append a transform, returning its index
    pub fn push(&mut self, transform: AffineTransform) -> usize {
        self.transforms.push(transform);
        self.transforms.len() - 1
    }

    /// Insert a transform at `index`, shifting later transforms up by one
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is greater than the current length
    pub fn insert(&mut self, index: usize, transform: AffineTransform) -> Result<()> {
        if index > self.transforms.len() {
            return Err(invalid_parameter(
                "index",
                &index,
                &format!("set has {} transforms", self.transforms.len()),
            ));
        }
        self.transforms.insert(index, transform);
        Ok(())
    }

    /// Remove and return the transform at `index`
    ///
    /// # Errors
    ///
    /// Returns an error if no transform exists at `index`
    pub fn remove(&mut self, index: usize) -> Result<AffineTransform> {
        if index >= self.transforms.len() {
            return Err(invalid_parameter(
                "index",
                &index,
                &format!("set has {} transforms", self.transforms.len()),
            ));
        }
        Ok(self.transforms.remove(index))
    }

    /// Transform at `index`
    pub fn get(&self, index: usize) -> Option<&AffineTransform> {
        self.transforms.get(index)
    }

    /// Mutable transform at `index`
    pub fn get_mut(&mut self, index: usize) -> Option<&mut AffineTransform> {
        self.transforms.get_mut(index)
    }

    /// Edit one parameter of one transform in place
    ///
    /// No bounds are checked here; invalid values are rejected when a
    /// computation starts.
    ///
    /// # Errors
    ///
    /// Returns an error if no transform exists at `index`
    pub fn set_parameter(&mut self, index: usize, parameter: Parameter, value: f64) -> Result<()> {
        let len = self.transforms.len();
        let transform = self.transforms.get_mut(index).ok_or_else(|| {
            invalid_parameter("index", &index, &format!("set has {len} transforms"))
        })?;
        transform.set(parameter, value);
        Ok(())
    }

    /// Number of transforms
    pub const fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Whether the set has no transforms
    pub const fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Iterate transforms in index order
    pub fn iter(&self) -> std::slice::Iter<'_, AffineTransform> {
        self.transforms.iter()
    }

    /// Transforms as a slice
    pub fn as_slice(&self) -> &[AffineTransform] {
        &self.transforms
    }

    /// Weights in index order
    pub fn weights(&self) -> Vec<f64> {
        self.transforms.iter().map(|transform| transform.p).collect()
    }

    /// Homogeneous matrices in index order
    pub fn matrices(&self) -> Vec<Array2<f64>> {
        self.transforms.iter().map(AffineTransform::matrix).collect()
    }

    /// Overwrite every weight with `1/k`
    ///
    /// Applies the auto-normalize correction to the caller's own set.
    pub fn normalize_weights(&mut self) {
        let uniform = uniform_weights(self.transforms.len());
        for (transform, weight) in self.transforms.iter_mut().zip(uniform) {
            transform.p = weight;
        }
    }
}

impl From<Vec<AffineTransform>> for TransformSet {
    fn from(transforms: Vec<AffineTransform>) -> Self {
        Self::from_transforms(transforms)
    }
}

impl FromIterator<AffineTransform> for TransformSet {
    fn from_iter<I: IntoIterator<Item = AffineTransform>>(iter: I) -> Self {
        Self::from_transforms(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TransformSet {
    type Item = &'a AffineTransform;
    type IntoIter = std::slice::Iter<'a, AffineTransform>;

    fn into_iter(self) -> Self::IntoIter {
        self.transforms.iter()
    }
}
