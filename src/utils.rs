/// Check if `n` is a prime number.
///
/// Uses trial division up to sqrt(n). Suitable for validating
/// field orders at construction, not for high-performance primality testing.
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Compute `p^m`, returning `None` on `u64` overflow.
pub const fn field_order(p: u64, m: usize) -> Option<u64> {
    let mut result: u64 = 1;
    let mut i = 0;
    while i < m {
        result = match result.checked_mul(p) {
            Some(r) => r,
            None => return None,
        };
        i += 1;
    }
    Some(result)
}

/// All positive divisors of `n` in increasing order.
///
/// Trial division up to sqrt(n); each hit `d` also yields its cofactor `n / d`.
/// Returns an empty vector for `n == 0`.
pub fn divisors(n: u64) -> Vec<u64> {
    let mut small = Vec::new();
    let mut large = Vec::new();

    let mut d: u64 = 1;
    while d <= n / d {
        if n % d == 0 {
            small.push(d);
            if d != n / d {
                large.push(n / d);
            }
        }
        d += 1;
    }

    small.extend(large.into_iter().rev());
    small
}
