// PointKit
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

pub trait Vector2D<T> {
    fn x(&self) -> T;
    fn y(&self) -> T;

    fn from_components(x: T, y: T) -> Self;
}

/// Implements `vector * scalar` by scaling each component.
#[macro_export]
macro_rules! impl_scalar_mul {
    ($($vector_type:ty, $scalar_type:ty);+ $(;)?) => {
        $(
            impl Mul<$scalar_type> for $vector_type {
                type Output = $vector_type;
                fn mul(self, rhs: $scalar_type) -> Self::Output {
                    <$vector_type as Vector2D<_>>::from_components(
                        <$vector_type as Vector2D<_>>::x(&self) * rhs,
                        <$vector_type as Vector2D<_>>::y(&self) * rhs,
                    )
                }
            }
        )+
    };
}
