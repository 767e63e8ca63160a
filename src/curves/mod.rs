//! Curve implementations, one per pool family.
//!
//! | Curve | Pool types | Solver |
//! |-------|------------|--------|
//! | [`ConstantProductCurve`] | `ConstantProductLowFee`, `ConstantProductHighFee` | closed form |
//! | [`StableSwapCurve`] | `StableSwap`, `StableSwapMovingRatio` | Newton D / y |

mod constant_product;
mod curve_box;
mod stable_swap;

pub use constant_product::ConstantProductCurve;
pub use curve_box::CurveBox;
pub use stable_swap::StableSwapCurve;
