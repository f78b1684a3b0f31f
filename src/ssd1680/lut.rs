//! Waveform lookup tables
//!
//! Opaque calibration data for the panel. Do not edit.

/// Partial refresh waveform, loaded with `WRITE_LUT_REGISTER` (0x32).
pub const PARTIAL_REFRESH_LUT: [u8; 153] = [
    0x00, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // LUT0
    0x80, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // LUT1
    0x40, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // LUT2
    0x00, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // LUT3
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // LUT4
    0x0A, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, // TP0
    0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // TP1
    0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // TP2
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // TP3
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // TP4
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // TP5
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // TP6
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // TP7
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // TP8
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // TP9
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // TP10
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // TP11
    0x22, 0x22, 0x22, 0x22, 0x22, 0x22, // FR
    0x00, 0x00, 0x00, // XON
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_lut_keeps_frame_rate_and_phase_bytes() {
        assert_eq!(PARTIAL_REFRESH_LUT.len(), 153);
        assert_eq!(PARTIAL_REFRESH_LUT[1], 0x40);
        assert_eq!(PARTIAL_REFRESH_LUT[60], 0x0A);
        assert_eq!(PARTIAL_REFRESH_LUT[66], 0x02);
        assert_eq!(PARTIAL_REFRESH_LUT[67], 0x01);
        assert_eq!(PARTIAL_REFRESH_LUT[74], 0x01);
        assert_eq!(&PARTIAL_REFRESH_LUT[144..150], &[0x22; 6]);
        assert_eq!(&PARTIAL_REFRESH_LUT[150..], &[0x00; 3]);
    }
}
