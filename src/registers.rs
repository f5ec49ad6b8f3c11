//! Register definitions for the APDS-9960
//!
//! The APDS-9960 exposes a flat 8-bit register space. User registers start at
//! 0x80; the gesture FIFO is read through the window at 0xFC-0xFF. Multi-byte
//! values (ALS thresholds, color channels) are little-endian and read or
//! written as one auto-incrementing block.
//!
//! Each field below is the single source of truth for its address and bit
//! range. The generated `modify` operation is the read-modify-write path used
//! by every setter in the driver, so unrelated bits in a shared register are
//! never clobbered.

device_driver::create_device!(
    device_name: Apds9960,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = LE;
        }

        /// ENABLE - Enable States and Interrupts (0x80)
        register Enable {
            const ADDRESS = 0x80;
            const SIZE_BITS = 8;

            /// Power ON
            pon: bool = 0,
            /// ALS enable
            aen: bool = 1,
            /// Proximity detect enable
            pen: bool = 2,
            /// Wait enable
            wen: bool = 3,
            /// ALS interrupt enable
            aien: bool = 4,
            /// Proximity interrupt enable
            pien: bool = 5,
            /// Gesture enable
            gesture_en: bool = 6,
            reserved_7: uint = 7..8,
        },

        /// ATIME - ADC Integration Time (0x81)
        register Atime {
            const ADDRESS = 0x81;
            const SIZE_BITS = 8;

            /// Integration time, 2.78 ms per step counted down from 256
            atime: uint = 0..8,
        },

        /// WTIME - Wait Time (0x83)
        register Wtime {
            const ADDRESS = 0x83;
            const SIZE_BITS = 8;

            /// Wait time, 2.78 ms per step counted down from 256
            wtime: uint = 0..8,
        },

        /// AILTL/AILTH - ALS Interrupt Low Threshold (0x84-0x85)
        register Ailt {
            const ADDRESS = 0x84;
            const SIZE_BITS = 16;

            /// Clear channel low threshold
            ailt: uint = 0..16,
        },

        /// AIHTL/AIHTH - ALS Interrupt High Threshold (0x86-0x87)
        register Aiht {
            const ADDRESS = 0x86;
            const SIZE_BITS = 16;

            /// Clear channel high threshold
            aiht: uint = 0..16,
        },

        /// PILT - Proximity Interrupt Low Threshold (0x89)
        register Pilt {
            const ADDRESS = 0x89;
            const SIZE_BITS = 8;

            /// Proximity low threshold
            pilt: uint = 0..8,
        },

        /// PIHT - Proximity Interrupt High Threshold (0x8B)
        register Piht {
            const ADDRESS = 0x8B;
            const SIZE_BITS = 8;

            /// Proximity high threshold
            piht: uint = 0..8,
        },

        /// PERS - Interrupt Persistence Filters (0x8C)
        register Pers {
            const ADDRESS = 0x8C;
            const SIZE_BITS = 8;

            /// ALS interrupt persistence
            apers: uint = 0..4,
            /// Proximity interrupt persistence
            ppers: uint = 4..8,
        },

        /// CONFIG1 - Configuration Register One (0x8D)
        register Config1 {
            const ADDRESS = 0x8D;
            const SIZE_BITS = 8;

            reserved_0: uint = 0..1,
            /// Wait long (12x WTIME)
            wlong: bool = 1,
            reserved_7_2: uint = 2..8,
        },

        /// PPULSE - Proximity Pulse Count and Length (0x8E)
        register Ppulse {
            const ADDRESS = 0x8E;
            const SIZE_BITS = 8;

            /// Pulse count minus one
            ppulse: uint = 0..6,
            /// Pulse length (4/8/16/32 us)
            pplen: uint = 6..8,
        },

        /// CONTROL - Gain Control (0x8F)
        register Control {
            const ADDRESS = 0x8F;
            const SIZE_BITS = 8;

            /// ALS and color gain
            again: uint = 0..2,
            /// Proximity gain
            pgain: uint = 2..4,
            reserved_5_4: uint = 4..6,
            /// LED drive strength
            ldrive: uint = 6..8,
        },

        /// CONFIG2 - Configuration Register Two (0x90)
        register Config2 {
            const ADDRESS = 0x90;
            const SIZE_BITS = 8;

            reserved_3_0: uint = 0..4,
            /// Additional LED current during proximity and gesture
            led_boost: uint = 4..6,
            /// Clear photodiode saturation interrupt enable
            cpsien: bool = 6,
            /// Proximity saturation interrupt enable
            psien: bool = 7,
        },

        /// ID - Device ID (0x92)
        /// Expected value: 0xAB or 0x9C
        register Id {
            const ADDRESS = 0x92;
            const SIZE_BITS = 8;

            /// Part number identification
            id: uint = 0..8,
        },

        /// STATUS - Device Status (0x93)
        register Status {
            const ADDRESS = 0x93;
            const SIZE_BITS = 8;

            /// ALS data valid
            avalid: bool = 0,
            /// Proximity data valid
            pvalid: bool = 1,
            /// Gesture interrupt
            gint: bool = 2,
            reserved_3: uint = 3..4,
            /// ALS interrupt
            aint: bool = 4,
            /// Proximity interrupt
            pint: bool = 5,
            /// Proximity or gesture analog saturation
            pgsat: bool = 6,
            /// Clear photodiode saturation
            cpsat: bool = 7,
        },

        /// CDATAL/CDATAH - Clear Channel Data (0x94-0x95)
        register Cdata {
            const ADDRESS = 0x94;
            const SIZE_BITS = 16;

            /// Clear channel count
            cdata: uint = 0..16,
        },

        /// RDATAL/RDATAH - Red Channel Data (0x96-0x97)
        register Rdata {
            const ADDRESS = 0x96;
            const SIZE_BITS = 16;

            /// Red channel count
            rdata: uint = 0..16,
        },

        /// GDATAL/GDATAH - Green Channel Data (0x98-0x99)
        register Gdata {
            const ADDRESS = 0x98;
            const SIZE_BITS = 16;

            /// Green channel count
            gdata: uint = 0..16,
        },

        /// BDATAL/BDATAH - Blue Channel Data (0x9A-0x9B)
        register Bdata {
            const ADDRESS = 0x9A;
            const SIZE_BITS = 16;

            /// Blue channel count
            bdata: uint = 0..16,
        },

        /// PDATA - Proximity Data (0x9C)
        register Pdata {
            const ADDRESS = 0x9C;
            const SIZE_BITS = 8;

            /// Proximity count
            pdata: uint = 0..8,
        },

        /// POFFSET_UR - Proximity Offset Up/Right (0x9D)
        register PoffsetUr {
            const ADDRESS = 0x9D;
            const SIZE_BITS = 8;

            /// Sign-magnitude offset for the UP and RIGHT photodiodes
            poffset_ur: uint = 0..8,
        },

        /// POFFSET_DL - Proximity Offset Down/Left (0x9E)
        register PoffsetDl {
            const ADDRESS = 0x9E;
            const SIZE_BITS = 8;

            /// Sign-magnitude offset for the DOWN and LEFT photodiodes
            poffset_dl: uint = 0..8,
        },

        /// CONFIG3 - Configuration Register Three (0x9F)
        register Config3 {
            const ADDRESS = 0x9F;
            const SIZE_BITS = 8;

            /// Photodiode mask (bit 0 = R, 1 = L, 2 = D, 3 = U)
            pmask: uint = 0..4,
            /// Sleep after interrupt
            sai: bool = 4,
            /// Proximity gain compensation
            pcmp: bool = 5,
            reserved_7_6: uint = 6..8,
        },

        /// GPENTH - Gesture Proximity Enter Threshold (0xA0)
        register Gpenth {
            const ADDRESS = 0xA0;
            const SIZE_BITS = 8;

            /// Proximity level that starts the gesture engine
            gpenth: uint = 0..8,
        },

        /// GEXTH - Gesture Exit Threshold (0xA1)
        register Gexth {
            const ADDRESS = 0xA1;
            const SIZE_BITS = 8;

            /// Level below which the gesture engine exits
            gexth: uint = 0..8,
        },

        /// GCONF1 - Gesture Configuration One (0xA2)
        register Gconf1 {
            const ADDRESS = 0xA2;
            const SIZE_BITS = 8;

            /// Gesture exit persistence
            gexpers: uint = 0..2,
            /// Gesture exit mask
            gexmsk: uint = 2..6,
            /// FIFO threshold for the gesture interrupt
            gfifoth: uint = 6..8,
        },

        /// GCONF2 - Gesture Configuration Two (0xA3)
        register Gconf2 {
            const ADDRESS = 0xA3;
            const SIZE_BITS = 8;

            /// Gesture wait time between cycles
            gwtime: uint = 0..3,
            /// Gesture LED drive strength
            gldrive: uint = 3..5,
            /// Gesture gain
            ggain: uint = 5..7,
            reserved_7: uint = 7..8,
        },

        /// GOFFSET_U - Gesture Up Offset (0xA4)
        register GoffsetU {
            const ADDRESS = 0xA4;
            const SIZE_BITS = 8;

            /// Sign-magnitude offset
            goffset: uint = 0..8,
        },

        /// GOFFSET_D - Gesture Down Offset (0xA5)
        register GoffsetD {
            const ADDRESS = 0xA5;
            const SIZE_BITS = 8;

            /// Sign-magnitude offset
            goffset: uint = 0..8,
        },

        /// GPULSE - Gesture Pulse Count and Length (0xA6)
        register Gpulse {
            const ADDRESS = 0xA6;
            const SIZE_BITS = 8;

            /// Pulse count minus one
            gpulse: uint = 0..6,
            /// Pulse length (4/8/16/32 us)
            gplen: uint = 6..8,
        },

        /// GOFFSET_L - Gesture Left Offset (0xA7)
        register GoffsetL {
            const ADDRESS = 0xA7;
            const SIZE_BITS = 8;

            /// Sign-magnitude offset
            goffset: uint = 0..8,
        },

        /// GOFFSET_R - Gesture Right Offset (0xA9)
        register GoffsetR {
            const ADDRESS = 0xA9;
            const SIZE_BITS = 8;

            /// Sign-magnitude offset
            goffset: uint = 0..8,
        },

        /// GCONF3 - Gesture Configuration Three (0xAA)
        register Gconf3 {
            const ADDRESS = 0xAA;
            const SIZE_BITS = 8;

            /// Gesture dimension select (0 = both pairs active)
            gdims: uint = 0..2,
            reserved_7_2: uint = 2..8,
        },

        /// GCONF4 - Gesture Configuration Four (0xAB)
        register Gconf4 {
            const ADDRESS = 0xAB;
            const SIZE_BITS = 8;

            /// Gesture mode
            gmode: bool = 0,
            /// Gesture interrupt enable
            gien: bool = 1,
            /// Clear the gesture FIFO
            gfifo_clr: bool = 2,
            reserved_7_3: uint = 3..8,
        },

        /// GFLVL - Gesture FIFO Level (0xAE)
        register Gflvl {
            const ADDRESS = 0xAE;
            const SIZE_BITS = 8;

            /// Number of quads waiting in the FIFO
            gflvl: uint = 0..8,
        },

        /// GSTATUS - Gesture Status (0xAF)
        register Gstatus {
            const ADDRESS = 0xAF;
            const SIZE_BITS = 8;

            /// Gesture FIFO data valid
            gvalid: bool = 0,
            /// Gesture FIFO overflow
            gfov: bool = 1,
            reserved_7_2: uint = 2..8,
        }
    }
);

// Re-export commonly used types for convenience
pub use Apds9960 as RegisterDevice;

/// Raw register addresses for byte-level access
///
/// Used where the driver reads or writes whole bytes through
/// [`ByteAccess`](crate::interface::ByteAccess) instead of the generated field
/// operations: mode control, power-on defaults, FIFO draining and the
/// interrupt clear addresses.
pub mod addr {
    /// Enable states and interrupts
    pub const ENABLE: u8 = 0x80;
    /// ADC integration time
    pub const ATIME: u8 = 0x81;
    /// Wait time
    pub const WTIME: u8 = 0x83;
    /// Interrupt persistence filters
    pub const PERS: u8 = 0x8C;
    /// Configuration register one
    pub const CONFIG1: u8 = 0x8D;
    /// Proximity pulse count and length
    pub const PPULSE: u8 = 0x8E;
    /// Configuration register two
    pub const CONFIG2: u8 = 0x90;
    /// Device ID
    pub const ID: u8 = 0x92;
    /// Clear channel data, low byte (start of the color block)
    pub const CDATAL: u8 = 0x94;
    /// Proximity offset up/right
    pub const POFFSET_UR: u8 = 0x9D;
    /// Proximity offset down/left
    pub const POFFSET_DL: u8 = 0x9E;
    /// Configuration register three
    pub const CONFIG3: u8 = 0x9F;
    /// Gesture configuration one
    pub const GCONF1: u8 = 0xA2;
    /// Gesture up offset
    pub const GOFFSET_U: u8 = 0xA4;
    /// Gesture down offset
    pub const GOFFSET_D: u8 = 0xA5;
    /// Gesture pulse count and length
    pub const GPULSE: u8 = 0xA6;
    /// Gesture left offset
    pub const GOFFSET_L: u8 = 0xA7;
    /// Gesture right offset
    pub const GOFFSET_R: u8 = 0xA9;
    /// Gesture configuration three
    pub const GCONF3: u8 = 0xAA;
    /// Gesture FIFO level
    pub const GFLVL: u8 = 0xAE;
    /// Gesture status
    pub const GSTATUS: u8 = 0xAF;
    /// Proximity interrupt clear
    pub const PICLEAR: u8 = 0xE5;
    /// All non-gesture interrupt clear
    pub const AICLEAR: u8 = 0xE7;
    /// Gesture FIFO window start (UP channel)
    pub const GFIFO_U: u8 = 0xFC;
}
