use enum_repr::EnumRepr;

// Field codes carry the wire convention used throughout this crate: bit 0 of
// a code is the first transmitted symbol of its field.

#[EnumRepr(type = "u8")]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Power {
    Off = 0,
    On = 1,
}

impl From<&str> for Power {
    // Anything that isn't literally "on" turns the unit off.
    fn from(label: &str) -> Self {
        match label {
            "on" => Power::On,
            _ => Power::Off,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    Heat,
    Dry,
    Cold,
    Auto,
}

// The mode is written twice into the frame, and the receiver expects both
// copies. The two tables below came out of separate captures and are *not*
// bit-rearrangements of one another; reproduce them literally.
impl Mode {
    /// Code for the copy in frame byte 6, symbols 3-4.
    pub fn primary_code(self) -> u8 {
        match self {
            Mode::Heat => 0b01,              // symbols 10
            Mode::Dry => 0b10,               // symbols 01
            Mode::Cold | Mode::Auto => 0b11, // symbols 11
        }
    }

    /// Code for the copy in frame byte 8, symbols 1-2.
    pub fn secondary_code(self) -> u8 {
        match self {
            Mode::Heat => 0b00,              // symbols 00
            Mode::Dry => 0b01,               // symbols 10
            Mode::Cold | Mode::Auto => 0b11, // symbols 11
        }
    }
}

impl From<&str> for Mode {
    fn from(label: &str) -> Self {
        match label {
            "heat" => Mode::Heat,
            "dry" => Mode::Dry,
            "cold" => Mode::Cold,
            // Unrecognized modes get the auto/cold encoding.
            _ => Mode::Auto,
        }
    }
}

#[EnumRepr(type = "u8")]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FanSpeed {
    Auto = 0b00,
    Low = 0b01,    // symbols 10
    Middle = 0b10, // symbols 01
    High = 0b11,   // symbols 11
}

impl From<&str> for FanSpeed {
    fn from(label: &str) -> Self {
        match label {
            "low" => FanSpeed::Low,
            "middle" => FanSpeed::Middle,
            "high" => FanSpeed::High,
            _ => FanSpeed::Auto,
        }
    }
}

#[EnumRepr(type = "u8")]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FanDirection {
    Auto = 0b000,
    Lowest = 0b001, // symbols 100
    Low = 0b010,    // symbols 010
    Middle = 0b011, // symbols 110
    High = 0b100,   // symbols 001
    // Some captures show symbols 101 for highest instead; the code below is
    // the one confirmed against the actual unit.
    Highest = 0b110, // symbols 011
    Loop = 0b111,    // symbols 111
}

impl From<&str> for FanDirection {
    fn from(label: &str) -> Self {
        match label {
            "lowest" => FanDirection::Lowest,
            "low" => FanDirection::Low,
            "middle" => FanDirection::Middle,
            "high" => FanDirection::High,
            "highest" => FanDirection::Highest,
            "loop" => FanDirection::Loop,
            _ => FanDirection::Auto,
        }
    }
}

/// One complete remote command, immutable per encoding call.
///
/// `temperature` is the target in whole degrees celsius. The receiver only
/// understands 16-31; anything else encodes the fixed fallback pattern (see
/// [`Frame::set_temperature`](super::Frame::set_temperature)).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    pub power: Power,
    pub mode: Mode,
    pub temperature: i32,
    pub fan_speed: FanSpeed,
    pub fan_direction: FanDirection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_label_fallback_test() {
        assert_eq!(Power::from("on"), Power::On);
        assert_eq!(Power::from("off"), Power::Off);
        assert_eq!(Power::from("ON"), Power::Off);
        assert_eq!(Power::from("banana"), Power::Off);
    }

    #[test]
    fn mode_tables_are_independent_test() {
        // heat is the asymmetric case: 10 in the primary copy, 00 in the
        // secondary one.
        assert_eq!(Mode::Heat.primary_code(), 0b01);
        assert_eq!(Mode::Heat.secondary_code(), 0b00);

        assert_eq!(Mode::Dry.primary_code(), 0b10);
        assert_eq!(Mode::Dry.secondary_code(), 0b01);

        assert_eq!(Mode::Cold.primary_code(), 0b11);
        assert_eq!(Mode::Cold.secondary_code(), 0b11);
        assert_eq!(Mode::Auto.primary_code(), 0b11);
        assert_eq!(Mode::Auto.secondary_code(), 0b11);
    }

    #[test]
    fn mode_label_fallback_test() {
        assert_eq!(Mode::from("heat"), Mode::Heat);
        assert_eq!(Mode::from("dehumidify"), Mode::Auto);
    }

    #[test]
    fn fan_speed_codes_test() {
        assert_eq!(FanSpeed::Auto.repr(), 0b00);
        assert_eq!(FanSpeed::Low.repr(), 0b01);
        assert_eq!(FanSpeed::Middle.repr(), 0b10);
        assert_eq!(FanSpeed::High.repr(), 0b11);
        assert_eq!(FanSpeed::from("turbo"), FanSpeed::Auto);
    }

    #[test]
    fn fan_direction_codes_test() {
        assert_eq!(FanDirection::Auto.repr(), 0b000);
        assert_eq!(FanDirection::Lowest.repr(), 0b001);
        assert_eq!(FanDirection::Low.repr(), 0b010);
        assert_eq!(FanDirection::Middle.repr(), 0b011);
        assert_eq!(FanDirection::High.repr(), 0b100);
        assert_eq!(FanDirection::Highest.repr(), 0b110);
        assert_eq!(FanDirection::Loop.repr(), 0b111);
        assert_eq!(FanDirection::from("sideways"), FanDirection::Auto);
    }
}
