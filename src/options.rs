//! Option sets for the multi-field GU600 commands.
//!
//! Every value here is a fixed code from the module's command table. Values
//! are selected, never computed; the driver shifts them into place when a
//! command packs several fields into one byte.

/// Graphic data orientation, write mode bit 7.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GraphicOrientation {
    Horizontal = 0,
    Vertical = 1,
}

/// Cursor movement axis, write mode bit 6.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CursorMovement {
    Horizontal = 0,
    Vertical = 1,
}

/// Cursor movement direction, write mode bit 5.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CursorDirection {
    Forward = 0,
    Backwards = 1,
}

/// Underscore cursor style, write mode bits 4-3.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UnderscoreCursor {
    StaticOff = 0,
    FlashOff = 1,
    StaticOn = 2,
    FlashOn = 3,
}

/// Pen combination mode, write mode bits 1-0.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PenType {
    Over = 0,
    And = 1,
    Or = 2,
    Xor = 3,
}

/// Automatic send, serial configuration bit 7.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AutomaticSend {
    Off = 0,
    On = 1,
}

/// Packet mode, serial configuration bit 6.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PacketMode {
    Off = 0,
    On = 1,
}

/// Communications buffer, serial configuration bit 5.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommsBuffer {
    Off = 0,
    On = 1,
}

/// Parity, serial configuration bit 3.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None = 0,
    Even = 1,
}

/// Baud rate, serial configuration bits 2-0.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BaudRate {
    B4800 = 0,
    B9600 = 1,
    B19200 = 2,
    B38400 = 3,
    B57600 = 4,
    B76800 = 5,
    B1200 = 6,
    B2400 = 7,
}

/// Base fonts. The select code doubles as the command byte.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontFace {
    /// Proportional mini font
    ProportionalMini = 0x1C,
    /// Fixed spaced 5x7 font
    Fixed5x7 = 0x1D,
    /// Fixed spaced 10x14 font
    Fixed10x14 = 0x1E,
}

/// Faces available through the extended font select command.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ExtendedFontFace {
    Font5x5A = 0x00,
    Font5x7A = 0x01,
    Font10x14A = 0x02,
    Font7x15A = 0x03,
    Font5x7C = 0x04,
    Font10x14C = 0x05,
}

/// Fixed or proportional spacing for the extended fonts.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontProportion {
    FixedSpace = 0,
    Proportional = 1,
}

/// Inter-character space in pixels for the extended fonts.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontSpace {
    One = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
}

/// How the selected window combines with the underlying data.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WindowMode {
    Invert = 0,
    Clear = 1,
    Fill = 2,
    Pattern = 3,
}

/// Window flash on/off period.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlashTime {
    Ms15 = 0,
    Ms30 = 1,
    Ms45 = 2,
    Ms100 = 3,
    Ms150 = 4,
    Ms200 = 5,
    Ms250 = 6,
    Ms350 = 7,
    Ms500 = 8,
    Ms750 = 9,
    Sec1 = 10,
    Sec1_5 = 11,
    Sec2 = 12,
    Sec2_5 = 13,
    Sec3 = 14,
    Sec3_5 = 15,
}

/// Wipe action applied to the selected window's underlying data.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WipeEffect {
    LeftToRightCover = 0x00,
    RightToLeftCover = 0x01,
    TopToBottomCover = 0x02,
    BottomToTopCover = 0x03,
    LeftToRightUncover = 0x04,
    RightToLeftUncover = 0x05,
    TopToBottomUncover = 0x06,
    BottomToTopUncover = 0x07,
    HorizontalCentreToEdgeCover = 0x08,
    HorizontalEdgeToCentreUncover = 0x09,
    VerticalCentreToEdgeCover = 0x0A,
    VerticalEdgeToCentreUncover = 0x0B,
}

/// Wipe effect speed in pixels per second.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WipeSpeed {
    Halt = 0x00,
    Px17 = 0x01,
    Px35 = 0x02,
    Px52 = 0x03,
    Px70 = 0x04,
    Px87 = 0x05,
    Px105 = 0x06,
    Px122 = 0x07,
    Px140 = 0x08,
    Px157 = 0x09,
    Px175 = 0x0A,
    Px192 = 0x0B,
    Px210 = 0x0C,
    Px227 = 0x0D,
    Px245 = 0x0E,
    Px262 = 0x0F,
    Px315 = 0x10,
}

/// Pre-defined window patterns.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PatternType {
    Full = 0x00,
    Half = 0x01,
    Ascend45 = 0x02,
    Descend45 = 0x03,
    VerticalZigZag = 0x04,
    HorizontalZigZag = 0x05,
    Grid45 = 0x06,
    Mesh = 0x07,
    Squares1 = 0x08,
    Squares2 = 0x09,
    Squares3 = 0x0A,
    Diamonds = 0x0B,
    Squares4 = 0x0C,
    Circles = 0x0D,
    Shades1 = 0x0E,
    Shades2 = 0x0F,
}

/// Pattern inversion, pattern option bit 3.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InvertPattern {
    Off = 0,
    On = 1,
}

/// Pattern alignment to the window, pattern option bit 2.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PatternAlignment {
    Off = 0,
    On = 1,
}

/// Vertical pattern alignment, pattern option bit 1.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PatternAlignV {
    Bottom = 0,
    Top = 1,
}

/// Horizontal pattern alignment, pattern option bit 0.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PatternAlignH {
    Right = 0,
    Left = 1,
}

/// Window 1 scroll speed in pixels per second.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollSpeed {
    Halt = 0x00,
    Px35 = 0x01,
    Px70 = 0x02,
    Px105 = 0x03,
    Px140 = 0x04,
    Px175 = 0x05,
    Px210 = 0x06,
    Px245 = 0x07,
    Px315 = 0x08,
}

/// Pad the end of scrolled text, scroll option bit 5.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PadEndOfText {
    Off = 0,
    On = 1,
}

/// Scroll the window contents along with the text, scroll option bit 4.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollContents {
    Off = 0,
    On = 1,
}

/// Scroll direction, scroll option bits 1-0.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollDirection {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

/// Fade target luminance, as a percentage of full brightness.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Luminance {
    /// 0%
    Off = 0,
    /// 14%
    Pct14 = 1,
    /// 28%
    Pct28 = 2,
    /// 43%
    Pct43 = 3,
    /// 57%
    Pct57 = 4,
    /// 71%
    Pct71 = 5,
    /// 86%
    Pct86 = 6,
    /// 100%
    Full = 7,
}

/// Automatic fade speed.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FadeSpeed {
    Fastest = 0,
    Fast = 1,
    Slow = 2,
    Slowest = 3,
}
