//! `f64` routines that live in `std`, with `libm` fallbacks when building without it.

macro_rules! unary {
    ($($name:ident => $libm:ident),* $(,)?) => {
        $(
            #[inline]
            pub(crate) fn $name(x: f64) -> f64 {
                #[cfg(feature = "std")]
                {
                    x.$name()
                }
                #[cfg(not(feature = "std"))]
                {
                    libm::$libm(x)
                }
            }
        )*
    };
}

unary! {
    abs => fabs,
    sqrt => sqrt,
    cbrt => cbrt,
    ceil => ceil,
    floor => floor,
    trunc => trunc,
    round => round,
    sin => sin,
    cos => cos,
    tan => tan,
    asin => asin,
    acos => acos,
    atan => atan,
}

#[inline]
pub(crate) fn powi(x: f64, n: i32) -> f64 {
    #[cfg(feature = "std")]
    {
        x.powi(n)
    }
    #[cfg(not(feature = "std"))]
    {
        libm::pow(x, n as f64)
    }
}

#[inline]
pub(crate) fn powf(x: f64, y: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.powf(y)
    }
    #[cfg(not(feature = "std"))]
    {
        libm::pow(x, y)
    }
}

#[inline]
pub(crate) fn hypot(x: f64, y: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.hypot(y)
    }
    #[cfg(not(feature = "std"))]
    {
        libm::hypot(x, y)
    }
}

#[inline]
pub(crate) fn copysign(magnitude: f64, sign: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        magnitude.copysign(sign)
    }
    #[cfg(not(feature = "std"))]
    {
        libm::copysign(magnitude, sign)
    }
}

#[inline]
pub(crate) fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        y.atan2(x)
    }
    #[cfg(not(feature = "std"))]
    {
        libm::atan2(y, x)
    }
}
