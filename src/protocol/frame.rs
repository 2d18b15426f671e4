use super::types::{FanDirection, FanSpeed, Mode, Power, Settings};

/// Frames are always exactly 18 bytes long.
pub const FRAME_LEN: usize = 18;

const CHECKSUM_BYTE: usize = FRAME_LEN - 1;

// 18 bytes:
//
//  0   1   2   3   4   5   6   7   8   9  10  ..  16  17
// C4  D3  64  80  00  PW  MO  TM  M2  FN  00  ..  00  CK
//
// PW: Power (symbol 5)
// MO: Mode, primary copy (symbols 3-4)
// TM: Temperature setpoint (symbols 0-3, most-significant bit first)
// M2: Mode, secondary copy (symbols 1-2); other symbols fixed
// FN: Fan speed (symbols 0-1) and fan direction (symbols 3-5)
// CK: Checksum over bytes 0-16
//
// Stored byte values put the first transmitted symbol in bit 0, so the
// constants below read right-to-left relative to the wire order given in the
// comments.
const TEMPLATE: [u8; FRAME_LEN] = [
    0b0010_0011, // symbols 11000100
    0b1100_1011, // symbols 11010011
    0b0010_0110, // symbols 01100100
    0b0000_0001, // symbols 10000000
    0b0000_0000,
    0b0000_0000, // power
    0b0000_0000, // mode, primary copy
    0b0000_0000, // temperature
    0b0011_0000, // symbols 00001100; mode, secondary copy
    0b0100_0000, // symbols 00000010; fan speed and direction
    0b0000_0000,
    0b0000_0000,
    0b0000_0000,
    0b0000_0000,
    0b0000_0000,
    0b0000_0000,
    0b0000_0000,
    0b0000_0000, // checksum, filled in by the constructor
];

/// A settings field inside the frame. `offset` counts transmitted symbols
/// from the start of the byte, which is the same thing as counting bits from
/// bit 0 in the stored value.
#[derive(Copy, Clone)]
struct BitField {
    byte: usize,
    offset: u8,
    width: u8,
}

const POWER: BitField = BitField { byte: 5, offset: 5, width: 1 };
const MODE_PRIMARY: BitField = BitField { byte: 6, offset: 3, width: 2 };
const TEMPERATURE: BitField = BitField { byte: 7, offset: 0, width: 4 };
const MODE_SECONDARY: BitField = BitField { byte: 8, offset: 1, width: 2 };
const FAN_SPEED: BitField = BitField { byte: 9, offset: 0, width: 2 };
const FAN_DIRECTION: BitField = BitField { byte: 9, offset: 3, width: 3 };

// Out-of-range setpoints encode this fixed pattern (symbols 0110) instead of
// clamping to the nearest valid temperature. Keep it as-is; the receiver's
// behavior for it has been observed, a clamp's has not.
const SETPOINT_FALLBACK: u8 = 0b0110;

const SETPOINT_MIN: i32 = 16;
const SETPOINT_MAX: i32 = 31;

/// Reinterprets the low `width` bits of `value` with the opposite bit
/// significance.
///
/// The wire transmits bytes least-significant bit first while the checksum
/// sums them as ordinary integers, and the temperature field is the lone
/// field written most-significant bit first. This is the one place that
/// conversion lives.
pub fn reverse_bits(value: u8, width: u8) -> u8 {
    debug_assert!(width >= 1 && width <= 8);
    value.reverse_bits() >> (8 - width as u32)
}

/// Checksum over the leading frame bytes: their sum, modulo 256.
///
/// Byte values are summed in the stored (first-transmitted-symbol-is-bit-0)
/// convention; that convention is part of the protocol, not a storage detail.
pub fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, b| acc.wrapping_add(*b))
}

/// One encoded 18-byte command.
///
/// Constructed from the fixed template; setters splice field codes into their
/// bit positions and re-derive the checksum byte, so a `Frame` is
/// transmittable at every point in its life.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame([u8; FRAME_LEN]);

impl Frame {
    pub fn new() -> Self {
        let mut frame = Frame(TEMPLATE);
        frame.update_checksum();
        frame
    }

    /// Encodes a complete settings tuple. Pure: the same settings always
    /// produce the same frame.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut frame = Self::new();
        frame.set_power(settings.power);
        frame.set_mode(settings.mode);
        frame.set_temperature(settings.temperature);
        frame.set_fan_speed(settings.fan_speed);
        frame.set_fan_direction(settings.fan_direction);
        frame
    }

    pub fn set_power(&mut self, power: Power) {
        self.set_field(POWER, power.repr());
    }

    /// Writes both copies of the mode field.
    pub fn set_mode(&mut self, mode: Mode) {
        self.set_field(MODE_PRIMARY, mode.primary_code());
        self.set_field(MODE_SECONDARY, mode.secondary_code());
    }

    /// Writes the setpoint field for `celsius` in 16-31, or the fixed
    /// fallback pattern for anything else. The fallback is not a temperature;
    /// don't read it back as one.
    pub fn set_temperature(&mut self, celsius: i32) {
        let code = if celsius >= SETPOINT_MIN && celsius <= SETPOINT_MAX {
            // The lone most-significant-bit-first field.
            reverse_bits((celsius - SETPOINT_MIN) as u8, TEMPERATURE.width)
        } else {
            SETPOINT_FALLBACK
        };
        self.set_field(TEMPERATURE, code);
    }

    pub fn set_fan_speed(&mut self, speed: FanSpeed) {
        self.set_field(FAN_SPEED, speed.repr());
    }

    pub fn set_fan_direction(&mut self, direction: FanDirection) {
        self.set_field(FAN_DIRECTION, direction.repr());
    }

    pub fn bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }

    /// All 144 bits in the order they go on the wire: bytes first to last,
    /// each least-significant bit first.
    pub fn transmission_bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.0
            .iter()
            .copied()
            .flat_map(|byte| (0..8).map(move |bit| byte & (1 << bit) != 0))
    }

    fn set_field(&mut self, field: BitField, code: u8) {
        let mask = ((1u16 << field.width) - 1) as u8;
        let byte = &mut self.0[field.byte];
        *byte = (*byte & !(mask << field.offset)) | ((code & mask) << field.offset);
        self.update_checksum();
    }

    fn update_checksum(&mut self) {
        self.0[CHECKSUM_BYTE] = checksum(&self.0[..CHECKSUM_BYTE]);
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&Settings> for Frame {
    fn from(settings: &Settings) -> Self {
        Self::from_settings(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    fn frame(settings: Settings) -> Frame {
        Frame::from_settings(&settings)
    }

    const HEAT_25: Settings = Settings {
        power: Power::On,
        mode: Mode::Heat,
        temperature: 25,
        fan_speed: FanSpeed::Auto,
        fan_direction: FanDirection::Auto,
    };

    #[test]
    fn reverse_bits_test() {
        assert_eq!(reverse_bits(0b0001, 4), 0b1000);
        assert_eq!(reverse_bits(0b1000, 4), 0b0001);
        assert_eq!(reverse_bits(0b1001, 4), 0b1001);
        assert_eq!(reverse_bits(0b1, 1), 0b1);
        assert_eq!(reverse_bits(0b1011_0110, 8), 0b0110_1101);
    }

    #[test]
    fn known_frame_test() {
        // Captured reference: on, heat, 25 degrees, everything auto.
        assert_eq!(
            frame(HEAT_25).bytes(),
            &[
                0x23, 0xcb, 0x26, 0x01, 0x00, 0x20, 0x08, 0x09, 0x30, 0x40,
                0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xb6,
            ]
        );
    }

    #[test]
    fn checksum_round_trip_test() {
        let combos = [
            HEAT_25,
            Settings {
                power: Power::Off,
                mode: Mode::Dry,
                temperature: 16,
                fan_speed: FanSpeed::High,
                fan_direction: FanDirection::Loop,
            },
            Settings {
                power: Power::On,
                mode: Mode::Cold,
                temperature: 99,
                fan_speed: FanSpeed::Middle,
                fan_direction: FanDirection::Highest,
            },
        ];
        for settings in combos.iter() {
            let bytes = *frame(*settings).bytes();
            assert_eq!(bytes.len(), FRAME_LEN);
            assert_eq!(bytes[17], checksum(&bytes[..17]));
        }
    }

    #[test]
    fn encoding_is_idempotent_test() {
        assert_eq!(frame(HEAT_25), frame(HEAT_25));
    }

    #[test]
    fn power_bit_test() {
        let mut settings = HEAT_25;
        assert_eq!(frame(settings).bytes()[5], 0b0010_0000);

        settings.power = Power::Off;
        assert_eq!(frame(settings).bytes()[5], 0b0000_0000);

        // String inputs other than "on" also land on off.
        settings.power = Power::from("standby");
        assert_eq!(frame(settings).bytes()[5], 0b0000_0000);
    }

    #[test]
    fn temperature_boundaries_test() {
        let at = |celsius| {
            let mut settings = HEAT_25;
            settings.temperature = celsius;
            frame(settings).bytes()[7]
        };

        assert_eq!(at(16), 0b0000);
        assert_eq!(at(17), 0b1000); // offset 1, transmitted 0001
        assert_eq!(at(31), 0b1111);

        // One past either end falls back to the fixed pattern.
        assert_eq!(at(15), SETPOINT_FALLBACK);
        assert_eq!(at(32), SETPOINT_FALLBACK);
        assert_eq!(at(-4), SETPOINT_FALLBACK);
    }

    #[test]
    fn mode_redundancy_test() {
        let heat = frame(HEAT_25);
        // Both copies must land in the same frame: byte 6 symbols 3-4 = 10,
        // byte 8 symbols 1-2 = 00 (template symbols 4-5 stay set).
        assert_eq!(heat.bytes()[6], 0b0000_1000);
        assert_eq!(heat.bytes()[8], 0b0011_0000);

        let mut settings = HEAT_25;
        settings.mode = Mode::Dry;
        let dry = frame(settings);
        assert_eq!(dry.bytes()[6], 0b0001_0000);
        assert_eq!(dry.bytes()[8], 0b0011_0010);
    }

    #[test]
    fn fan_fields_share_byte_test() {
        let mut settings = HEAT_25;
        settings.fan_speed = FanSpeed::High;
        settings.fan_direction = FanDirection::Loop;
        // Template bit 6 stays set; the two fields are disjoint.
        assert_eq!(frame(settings).bytes()[9], 0b0111_1011);
    }

    #[test]
    fn transmission_bits_test() {
        let bits: Vec<bool> = Frame::new().transmission_bits().collect();
        assert_eq!(bits.len(), FRAME_LEN * 8);
        // Byte 0 is transmitted 11000100.
        assert_eq!(
            &bits[..8],
            &[true, true, false, false, false, true, false, false]
        );
    }

    #[test]
    fn setters_keep_checksum_current_test() {
        let mut frame = Frame::new();
        assert_eq!(frame.bytes()[17], checksum(&frame.bytes()[..17]));

        frame.set_power(Power::On);
        assert_eq!(frame.bytes()[17], checksum(&frame.bytes()[..17]));

        frame.set_fan_direction(FanDirection::Lowest);
        assert_eq!(frame.bytes()[17], checksum(&frame.bytes()[..17]));
    }
}
