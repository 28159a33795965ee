//! Speed from a displacement magnitude and a time interval

use crate::{PhysvekError, Result};

/// Average speed: `magnitude / (end_time - start_time)`
///
/// The sign is kept as computed; a reversed interval gives a negative speed.
///
/// # Errors
///
/// [`PhysvekError::ZeroElapsedTime`] when `start_time == end_time`.
///
/// ```rust
/// use physvek::kinematics::speed;
///
/// assert_eq!(speed(100.0, 0.0, 20.0).unwrap(), 5.0);
/// assert!(speed(100.0, 3.0, 3.0).is_err());
/// ```
pub fn speed(magnitude: f64, start_time: f64, end_time: f64) -> Result<f64> {
    let elapsed = end_time - start_time;
    if elapsed == 0.0 {
        return Err(PhysvekError::ZeroElapsedTime { time: start_time });
    }
    Ok(magnitude / elapsed)
}
