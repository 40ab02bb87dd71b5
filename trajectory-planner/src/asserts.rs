//! Leveled assertions. The level is [`PLANNER_ASSERT_SIMPLE`] by default and is raised to
//! [`PLANNER_ASSERT_EXTREME`] by the `debug-checks` feature, which makes the engine re-verify its
//! own bookkeeping.

#[cfg(not(feature = "debug-checks"))]
pub const PLANNER_ASSERT_LEVEL_DEFINITION: u8 = PLANNER_ASSERT_SIMPLE;

#[cfg(feature = "debug-checks")]
pub const PLANNER_ASSERT_LEVEL_DEFINITION: u8 = PLANNER_ASSERT_EXTREME;

pub const PLANNER_ASSERT_SIMPLE: u8 = 1;
pub const PLANNER_ASSERT_MODERATE: u8 = 2;
pub const PLANNER_ASSERT_ADVANCED: u8 = 3;
pub const PLANNER_ASSERT_EXTREME: u8 = 4;

#[macro_export]
#[doc(hidden)]
macro_rules! planner_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::PLANNER_ASSERT_LEVEL_DEFINITION >= $crate::asserts::PLANNER_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! planner_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::PLANNER_ASSERT_LEVEL_DEFINITION >= $crate::asserts::PLANNER_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! planner_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::PLANNER_ASSERT_LEVEL_DEFINITION >= $crate::asserts::PLANNER_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}

