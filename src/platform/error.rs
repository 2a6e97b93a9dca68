//! Platform error types
//!
//! Every platform implementation maps its HAL-specific errors onto these variants,
//! so the control logic only ever sees [`PlatformError`].

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlatformError {
    /// Analog-to-digital conversion failed
    Adc(AdcError),
    /// PWM operation failed
    Pwm(PwmError),
    /// GPIO operation failed
    Gpio(GpioError),
    /// Display operation failed
    Display(DisplayError),
    /// Platform initialization failed
    InitializationFailed,
}

/// ADC-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Channel index is not wired on this board
    InvalidChannel,
    /// Conversion did not complete
    ConversionFailed,
}

/// PWM-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PwmError {
    /// Level above the configured wrap value
    LevelOutOfRange,
    /// Hardware rejected the compare value
    HardwareError,
}

/// GPIO-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioError {
    /// Hardware error
    HardwareError,
}

/// Display-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Drawing into the frame buffer failed
    DrawFailed,
    /// Transferring the frame buffer to the panel failed
    FlushFailed,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Adc(e) => write!(f, "ADC error: {:?}", e),
            PlatformError::Pwm(e) => write!(f, "PWM error: {:?}", e),
            PlatformError::Gpio(e) => write!(f, "GPIO error: {:?}", e),
            PlatformError::Display(e) => write!(f, "Display error: {:?}", e),
            PlatformError::InitializationFailed => write!(f, "Platform initialization failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_peripheral() {
        let err = PlatformError::Display(DisplayError::FlushFailed);
        assert_eq!(format!("{}", err), "Display error: FlushFailed");

        let err = PlatformError::Adc(AdcError::InvalidChannel);
        assert_eq!(format!("{}", err), "ADC error: InvalidChannel");
    }
}
