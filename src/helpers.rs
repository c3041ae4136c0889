#[cfg(test)]
macro_rules! assert_approx_eq {
	($left: expr, $right: expr, $tol: expr) => ({
		match ($left, $right, $tol) {
			(left_val , right_val, tol_val) => {
				let delta = (left_val - right_val).abs();
				if !(delta < tol_val) {
					panic!(
						"assertion failed: `(left ≈ right)` \
						(left: `{}`, right: `{}`) \
						with ∆={:1.1e} (allowed ∆={:e})",
						left_val , right_val, delta, tol_val
					)
				}
			}
		}
	});
	($left: expr, $right: expr) => (assert_approx_eq!(($left), ($right), 1e-15))
}


#[cfg(test)]
mod tests {
	#[test]
	fn approx_eq_within_tolerance() {
		assert_approx_eq!(0.1f64 + 0.2, 0.3);
		assert_approx_eq!(1.0f32, 1.0004, 1e-3);
	}

	#[test]
	#[should_panic(expected = "assertion failed")]
	fn approx_eq_outside_tolerance() {
		assert_approx_eq!(1.0f64, 1.1, 1e-3);
	}
}
