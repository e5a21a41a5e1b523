//! Conversion of logical light values into Litra Beam reports.
//!
//! All inputs are clamped into their valid range, so encoding never fails.

use bytes::{BufMut, Bytes, BytesMut};

use crate::protocol::{
    Property, BRIGHTNESS_MAX, BRIGHTNESS_MIN, HEADER, REPORT_ID, TEMPERATURE_MAX,
    TEMPERATURE_MIN, TEMPERATURE_STEP,
};

/// Convert a brightness percentage to device units.
///
/// The percentage is clamped to `0..=100` and mapped linearly onto
/// `30..=400`.
pub fn brightness_value(percent: i32) -> u16 {
    let percent = percent.clamp(0, 100);
    scale_percent(percent, BRIGHTNESS_MIN, BRIGHTNESS_MAX).round() as u16
}

/// Convert a Kelvin temperature to device units.
///
/// The temperature is clamped to `2700..=6500` and rounded to the nearest
/// multiple of 100.
pub fn temperature_kelvin_value(kelvin: i32) -> u16 {
    let kelvin = kelvin.clamp(TEMPERATURE_MIN.into(), TEMPERATURE_MAX.into());
    round_to_step(f64::from(kelvin))
}

/// Convert a temperature percentage to device units.
///
/// The percentage is clamped to `0..=100`, mapped linearly onto `2700..=6500`
/// and then rounded like [`temperature_kelvin_value`].
pub fn temperature_percent_value(percent: i32) -> u16 {
    let percent = percent.clamp(0, 100);
    round_to_step(scale_percent(percent, TEMPERATURE_MIN, TEMPERATURE_MAX))
}

/// Encode the power state.
pub fn encode_power(on: bool) -> Bytes {
    Bytes::copy_from_slice(&[u8::from(on)])
}

/// Encode a brightness percentage.
pub fn encode_brightness(percent: i32) -> Bytes {
    u16_bytes(brightness_value(percent))
}

/// Encode a Kelvin color temperature.
pub fn encode_temperature_kelvin(kelvin: i32) -> Bytes {
    u16_bytes(temperature_kelvin_value(kelvin))
}

/// Encode a color temperature percentage.
pub fn encode_temperature_percent(percent: i32) -> Bytes {
    u16_bytes(temperature_percent_value(percent))
}

/// Frame a property payload as a complete output report.
pub fn report_bytes(property: Property, payload: &[u8]) -> Bytes {
    let mut buf = BytesMut::with_capacity(4 + payload.len());

    // Report ID.
    buf.put_u8(REPORT_ID);

    // Header.
    buf.put_slice(&HEADER);

    // Property.
    buf.put_u8(property.code());

    // Payload.
    buf.put_slice(payload);

    buf.freeze()
}

/// A single property change, ready to be written to a light.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct PropertyUpdate {
    property: Property,
    payload: Bytes,
}

impl PropertyUpdate {
    pub fn power(on: bool) -> Self {
        Self { property: Property::Power, payload: encode_power(on) }
    }

    pub fn brightness(percent: i32) -> Self {
        Self { property: Property::Brightness, payload: encode_brightness(percent) }
    }

    pub fn temperature_kelvin(kelvin: i32) -> Self {
        Self { property: Property::Temperature, payload: encode_temperature_kelvin(kelvin) }
    }

    pub fn temperature_percent(percent: i32) -> Self {
        Self { property: Property::Temperature, payload: encode_temperature_percent(percent) }
    }

    pub fn property(&self) -> Property {
        self.property
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Complete output report for this update.
    pub fn report(&self) -> Bytes {
        report_bytes(self.property, &self.payload)
    }
}

/// Map a clamped percentage linearly onto `min..=max`.
#[inline]
fn scale_percent(percent: i32, min: u16, max: u16) -> f64 {
    let (min, max) = (f64::from(min), f64::from(max));
    min + (f64::from(percent) / 100.) * (max - min)
}

/// Round to the nearest temperature step, ties away from zero.
#[inline]
fn round_to_step(value: f64) -> u16 {
    let step = f64::from(TEMPERATURE_STEP);
    ((value / step).round() * step) as u16
}

#[inline]
fn u16_bytes(value: u16) -> Bytes {
    let mut bytes = BytesMut::with_capacity(2);
    bytes.put_u16(value);
    bytes.freeze()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_payload() {
        assert_eq!(&encode_power(true)[..], &[0x01]);
        assert_eq!(&encode_power(false)[..], &[0x00]);
    }

    #[test]
    fn brightness_bounds() {
        assert_eq!(brightness_value(0), 30);
        assert_eq!(brightness_value(100), 400);
        assert_eq!(brightness_value(50), 215);
        assert_eq!(brightness_value(-20), 30);
        assert_eq!(brightness_value(150), 400);
        assert_eq!(&encode_brightness(150)[..], &[0x01, 0x90]);
    }

    #[test]
    fn brightness_rounds_to_nearest() {
        // 30 + 0.01 * 370 = 33.7
        assert_eq!(brightness_value(1), 34);
        // 30 + 0.33 * 370 = 152.1
        assert_eq!(brightness_value(33), 152);
    }

    #[test]
    fn kelvin_rounding() {
        assert_eq!(temperature_kelvin_value(2700), 2700);
        assert_eq!(temperature_kelvin_value(6500), 6500);
        assert_eq!(temperature_kelvin_value(2750), 2800);
        assert_eq!(temperature_kelvin_value(2749), 2700);
        assert_eq!(temperature_kelvin_value(1000), 2700);
        assert_eq!(temperature_kelvin_value(9000), 6500);
        assert_eq!(&encode_temperature_kelvin(2750)[..], &[0x0a, 0xf0]);
    }

    #[test]
    fn percent_temperature() {
        assert_eq!(temperature_percent_value(0), 2700);
        assert_eq!(temperature_percent_value(100), 6500);
        assert_eq!(temperature_percent_value(50), 4600);
        // 2700 + 0.01 * 3800 = 2738
        assert_eq!(temperature_percent_value(1), 2700);
        assert_eq!(temperature_percent_value(-1), 2700);
        assert_eq!(temperature_percent_value(101), 6500);
    }

    #[test]
    fn report_framing() {
        let update = PropertyUpdate::brightness(150);
        assert_eq!(&update.report()[..], &[0x11, 0xff, 0x04, 0x4c, 0x01, 0x90]);

        let update = PropertyUpdate::temperature_kelvin(2750);
        assert_eq!(&update.report()[..], &[0x11, 0xff, 0x04, 0x9c, 0x0a, 0xf0]);

        let update = PropertyUpdate::power(true);
        assert_eq!(&update.report()[..], &[0x11, 0xff, 0x04, 0x1c, 0x01]);
    }

    #[test]
    fn payload_len_matches_property() {
        for update in [
            PropertyUpdate::power(false),
            PropertyUpdate::brightness(10),
            PropertyUpdate::temperature_kelvin(4000),
            PropertyUpdate::temperature_percent(10),
        ] {
            assert_eq!(update.payload().len(), update.property().payload_len());
        }
    }
}
