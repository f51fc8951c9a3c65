//! GU600 command table.
//!
//! Single-byte instructions occupy 0x00-0x1F. Everything above that range is
//! either a font select code or a printable character from the selected
//! font. Extended commands are the escape byte 0x1B followed by an
//! [`EscInstruction`] sub-code.

/// Packet header byte of the acknowledged transfer mode.
///
/// The acknowledged mode wraps each message in STX/ETX framing and waits for
/// [`VFD_ACK`]. The driver sends raw command streams; none of these bytes
/// appear on the wire.
pub const PACKET_HEADER: u8 = 0x02;
/// Packet footer byte of the acknowledged transfer mode.
pub const PACKET_FOOTER: u8 = 0x03;
/// Acknowledge byte returned by the module in packet mode.
pub const VFD_ACK: u8 = 0x50;

/// Upper bound on a single encoded message, in bytes.
pub const MAX_MESSAGE_SIZE: usize = 256;

/// Number of brightness steps the module supports.
pub const BRIGHTNESS_LEVELS: u8 = 8;

/// Brightness select codes run from this value up to 0xFF.
pub const BRIGHTNESS_BASE: u8 = 0xF8;

/// A window pattern is 16x16 pixels, vertical format, D7 uppermost.
pub const PATTERN_DATA_SIZE: usize = 32;

/// GU600 single-byte instructions.
#[derive(Debug, Clone, Copy)]
pub enum Instruction {
    /// Dummy byte, no operation
    DUMMY = 0x00,
    /// Non destructive backspace
    BS = 0x08,
    /// Horizontal tab
    HT = 0x09,
    /// Line feed
    LF = 0x0A,
    /// Home, top-left of the display
    HOME = 0x0B,
    /// Vertical tab, up one character row
    VT = 0x0C,
    /// Carriage return
    CR = 0x0D,
    /// Clear to end of line
    CLREOL = 0x0E,
    /// Self-test mode, stops on the next received byte
    TEST = 0x0F,
    /// Cursor position set
    POSSET = 0x10,
    /// Fill area
    AREASET = 0x11,
    /// Clear area
    AREACLR = 0x12,
    /// Invert area
    AREAINV = 0x13,
    /// Draw box outline
    BOXSET = 0x14,
    /// Clear box outline
    BOXCLR = 0x15,
    /// Set pixel at the cursor
    PIXSET = 0x16,
    /// Clear pixel at the cursor
    PIXCLR = 0x17,
    /// Graphic write, length prefixed
    GRPWR = 0x18,
    /// Reset to power-on defaults
    RESET = 0x19,
    /// Write mode
    WRMODE = 0x1A,
    /// Escape prefix; also starts a macro data write
    ESC = 0x1B,
    /// Area graphic write
    AREAWR = 0x1F,
}

/// Sub-codes following the 0x1B escape prefix.
#[derive(Debug, Clone, Copy)]
pub enum EscInstruction {
    /// Binary receive mode
    BIN = 0x42,
    /// Checksum read
    CHKSUM = 0x43,
    /// I/O port direction
    PORTDIR = 0x44,
    /// VFD power supply off
    PWROFF = 0x46,
    /// Hex receive mode
    HEX = 0x48,
    /// Asynchronous serial configuration
    SERIAL = 0x49,
    /// Key scanning mode
    KEYSCAN = 0x4B,
    /// EEPROM lock
    LOCK = 0x4C,
    /// Macro erase
    MACERASE = 0x4D,
    /// I/O port output lines
    PORTOUT = 0x4F,
    /// VFD power supply on
    PWRON = 0x50,
    /// I/O port status read; window mode select
    PORTRD = 0x52,
    /// EEPROM unlock
    UNLOCK = 0x55,
    /// Window 1 select
    WIN1 = 0x80,
    /// Window 2 select
    WIN2 = 0x81,
    /// Window define
    WINDEF = 0x82,
    /// Window show
    WINSHOW = 0x84,
    /// Window kill
    WINKILL = 0x85,
    /// Window flash
    WINFLASH = 0x86,
    /// Window flash speed
    FLASHSPD = 0x87,
    /// Window wipe effect
    WIPE = 0x88,
    /// Window wipe speed
    WIPESPD = 0x89,
    /// Window pattern select
    PATSEL = 0x8D,
    /// Window pattern data
    PATDATA = 0x8E,
    /// Window pattern option
    PATOPT = 0x8F,
    /// Scroll text in window
    SCROLL = 0x90,
    /// Scroll speed
    SCROLLSPD = 0x91,
    /// Extended font select
    EXTFONT = 0x98,
    /// Line draw
    LINE = 0x9A,
    /// Automatic fade
    FADE = 0x9C,
    /// Command delay
    DELAY = 0x9F,
}
