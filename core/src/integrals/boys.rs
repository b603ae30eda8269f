//! Boys function `F_n(x) = \int_0^1 t^{2n} exp(-x t^2) dt`.
//!
//! Below `max_order + SERIES_MARGIN` the highest order is summed as a power series and the
//! lower orders follow from the downward recursion, which is stable for every argument. Above
//! it `F_0` is taken from the error function and the upward recursion is used; there the
//! argument dominates every `(2n - 1) / 2` factor, so the recursion does not amplify errors.

const SERIES_MARGIN: f64 = 30.0;
const SERIES_TOLERANCE: f64 = 1e-17;

/// Fills `values[0..=max_order]` with `F_0(argument) ..= F_max_order(argument)`.
///
/// # Panics
///
/// If the argument is negative or NaN, or `values` holds fewer than `max_order + 1` entries.
pub fn boys_function(max_order: usize, argument: f64, values: &mut [f64]) {
    assert!(
        argument >= 0.0,
        "boys function argument must be non-negative, got {argument}"
    );
    assert!(
        values.len() > max_order,
        "need room for {} boys values, got {}",
        max_order + 1,
        values.len()
    );

    let values = &mut values[..=max_order];

    if argument == 0.0 {
        for (n, value) in values.iter_mut().enumerate() {
            *value = 1.0 / (2 * n + 1) as f64;
        }
        return;
    }

    if argument < max_order as f64 + SERIES_MARGIN {
        downward(max_order, argument, values);
    } else {
        upward(max_order, argument, values);
    }
}

/// Series for the highest order, then `F_n = (2x F_{n+1} + e^-x) / (2n + 1)`.
fn downward(max_order: usize, argument: f64, values: &mut [f64]) {
    let exp = (-argument).exp();
    values[max_order] = 0.5 * exp * series(max_order, argument);

    for n in (0..max_order).rev() {
        values[n] = (2.0 * argument * values[n + 1] + exp) / (2 * n + 1) as f64;
    }
}

/// `F_0` from the error function, then `F_n = ((2n - 1) F_{n-1} - e^-x) / (2x)`.
fn upward(max_order: usize, argument: f64, values: &mut [f64]) {
    let exp = (-argument).exp();
    values[0] = 0.5 * (std::f64::consts::PI / argument).sqrt() * libm::erf(argument.sqrt());

    for n in 1..=max_order {
        values[n] = ((2 * n - 1) as f64 * values[n - 1] - exp) / (2.0 * argument);
    }
}

/// sum_k x^k / ((n + 1/2)(n + 3/2)...(n + k + 1/2)); all terms are positive.
fn series(order: usize, argument: f64) -> f64 {
    let mut denominator = order as f64 + 0.5;
    let mut term = 1.0 / denominator;
    let mut sum = term;

    loop {
        denominator += 1.0;
        term *= argument / denominator;
        sum += term;

        if term < SERIES_TOLERANCE * sum {
            return sum;
        }
    }
}
