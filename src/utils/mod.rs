mod maths_utils;

pub use maths_utils::{excess_kurtosis, mean_and_stddev, percentile, skewness};
