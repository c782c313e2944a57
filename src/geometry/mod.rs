// PointKit
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

mod number;
mod point;
mod vector2d;

pub use number::format_number;
use point::GenericPoint;

pub type Point = GenericPoint<f64>;
