// PointKit
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, LowerExp},
    ops::{Mul, MulAssign},
};

use super::super::impl_scalar_mul;
use super::{number::format_number, vector2d::Vector2D};

/// A mutable 2D coordinate pair.
#[derive(Default, Copy, Clone, PartialEq, Deserialize, Serialize)]
pub struct GenericPoint<T> {
    x: T,
    y: T,
}

impl<T> GenericPoint<T>
where
    T: Copy,
{
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> T {
        self.x
    }

    pub fn y(&self) -> T {
        self.y
    }
}

impl<T> GenericPoint<T>
where
    T: Copy + MulAssign,
{
    /// Multiplies both coordinates by `n` in place.
    ///
    /// Zero, negative and non-finite factors follow IEEE-754 arithmetic.
    pub fn scale(&mut self, n: T) {
        self.x *= n;
        self.y *= n;
    }
}

impl<T> GenericPoint<T>
where
    T: Float + LowerExp,
{
    /// Renders the point as `(x, y)`.
    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

impl<T> Vector2D<T> for GenericPoint<T>
where
    T: Copy,
{
    fn x(&self) -> T {
        self.x()
    }
    fn y(&self) -> T {
        self.y()
    }

    fn from_components(x: T, y: T) -> Self {
        Self::new(x, y)
    }
}

impl_scalar_mul!(GenericPoint<f64>, f64; GenericPoint<f32>, f32);

impl<T> fmt::Display for GenericPoint<T>
where
    T: Float + LowerExp,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", format_number(self.x), format_number(self.y))
    }
}

impl<T> fmt::Debug for GenericPoint<T>
where
    T: Copy + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Point")
            .field("x", &self.x())
            .field("y", &self.y())
            .finish()
    }
}
