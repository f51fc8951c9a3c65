#![no_std]

//! This crate provides a driver for Noritake GU600 series vacuum
//! fluorescent display modules.
//!
//! The driver encodes each display operation into the module's byte
//! protocol and hands the finished message to a [`transport::Transport`].
//! SPI, I2C and RS232 links are provided; anything that can push bytes at
//! the module in order will do.

pub mod instruction;
pub mod models;
pub mod options;
pub mod transport;

use crate::instruction::{
    EscInstruction, Instruction, BRIGHTNESS_BASE, BRIGHTNESS_LEVELS, MAX_MESSAGE_SIZE,
    PATTERN_DATA_SIZE,
};
use crate::models::Geometry;
use crate::options::{
    AutomaticSend, BaudRate, CommsBuffer, CursorDirection, CursorMovement, ExtendedFontFace,
    FadeSpeed, FlashTime, FontFace, FontProportion, FontSpace, GraphicOrientation, InvertPattern,
    Luminance, PacketMode, PadEndOfText, Parity, PatternAlignH, PatternAlignV, PatternAlignment,
    PatternType, PenType, ScrollContents, ScrollDirection, ScrollSpeed, UnderscoreCursor,
    WindowMode, WipeEffect, WipeSpeed,
};
use crate::transport::Transport;

use heapless::Vec;

/// Failures surfaced by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The transport did not deliver the message.
    Comms,
    /// Window pattern data must be exactly 32 bytes.
    PatternSize,
    /// The payload does not fit in a single message.
    MessageTooLong,
}

/// Bound `value` into the inclusive range `min..=max`.
///
/// Out-of-range arguments are corrected, never rejected; the module applies
/// the same tolerance on its side of the wire.
fn minmax(min: u8, value: u8, max: u8) -> u8 {
    num_traits::clamp(value, min, max)
}

/// GU600 driver, generic over the byte link to the module.
pub struct Gu600<T>
where
    T: Transport,
{
    transport: T,
    geometry: Geometry,
}

impl<T> Gu600<T>
where
    T: Transport,
{
    /// Creates a new driver over the given link.
    ///
    /// The geometry is normally taken from [`models::geometry_for`] and is
    /// only consulted for full-screen operations such as [`Gu600::clear_all`].
    pub fn new(transport: T, geometry: Geometry) -> Self {
        Gu600 {
            transport,
            geometry,
        }
    }

    /// Display dimensions this driver was constructed with.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Consume the driver and release the transport.
    pub fn release(self) -> T {
        self.transport
    }

    /// Send a raw, pre-encoded message to the module.
    pub fn write(&mut self, message: &[u8]) -> Result<(), Error> {
        self.transport.write(message).map_err(|_| Error::Comms)
    }

    /// Send a dummy byte.
    pub fn dummy_byte(&mut self) -> Result<(), Error> {
        self.write(&[Instruction::DUMMY as u8])
    }

    /// Start user defined macro 1-7.
    pub fn start_macro(&mut self, number: u8) -> Result<(), Error> {
        self.write(&[minmax(0, number, 7)])
    }

    /// Non destructive backspace. The cursor is moved left by the width of
    /// the currently selected font; at the left end of the display no
    /// movement is made.
    pub fn backspace(&mut self) -> Result<(), Error> {
        self.write(&[Instruction::BS as u8])
    }

    /// Move the cursor right by the width of the currently selected font.
    pub fn horizontal_tab(&mut self) -> Result<(), Error> {
        self.write(&[Instruction::HT as u8])
    }

    /// Move the cursor down by the height of the currently selected font.
    pub fn line_feed(&mut self) -> Result<(), Error> {
        self.write(&[Instruction::LF as u8])
    }

    /// Move the cursor to the top-left of the display. The vertical
    /// position depends on the currently selected font, so a character can
    /// be written into the corner immediately.
    pub fn home(&mut self) -> Result<(), Error> {
        self.write(&[Instruction::HOME as u8])
    }

    /// Move the cursor up one character row.
    pub fn vertical_tab(&mut self) -> Result<(), Error> {
        self.write(&[Instruction::VT as u8])
    }

    /// Move the cursor horizontal position to zero. The vertical position
    /// is unchanged.
    pub fn carriage_return(&mut self) -> Result<(), Error> {
        self.write(&[Instruction::CR as u8])
    }

    /// Clear all characters from the cursor to the end of the display.
    pub fn clear_eol(&mut self) -> Result<(), Error> {
        self.write(&[Instruction::CLREOL as u8])
    }

    /// Place the module into self-test mode. Test mode stops on the next
    /// received byte.
    pub fn self_test(&mut self) -> Result<(), Error> {
        self.write(&[Instruction::TEST as u8])
    }

    /// Set the cursor position.
    pub fn set_cursor_position(&mut self, x: u8, y: u8) -> Result<(), Error> {
        self.write(&[Instruction::POSSET as u8, x, y])
    }

    /// Illuminate all dots within the specified area. The cursor position
    /// is affected by this command.
    pub fn set_area(&mut self, left: u8, top: u8, right: u8, bottom: u8) -> Result<(), Error> {
        self.area_command(Instruction::AREASET, left, top, right, bottom)
    }

    /// Clear all dots within the specified area. The cursor position is
    /// affected by this command.
    pub fn clear_area(&mut self, left: u8, top: u8, right: u8, bottom: u8) -> Result<(), Error> {
        self.area_command(Instruction::AREACLR, left, top, right, bottom)
    }

    /// Clear the entire screen.
    pub fn clear_all(&mut self) -> Result<(), Error> {
        let right = (self.geometry.width - 1) as u8;
        let bottom = (self.geometry.height - 1) as u8;
        self.clear_area(0, 0, right, bottom)
    }

    /// Invert all dots within the specified area. The cursor position is
    /// affected by this command.
    pub fn invert_area(&mut self, left: u8, top: u8, right: u8, bottom: u8) -> Result<(), Error> {
        self.area_command(Instruction::AREAINV, left, top, right, bottom)
    }

    /// Draw a box outline. Dots within the outline are unchanged.
    pub fn set_outline(&mut self, left: u8, top: u8, right: u8, bottom: u8) -> Result<(), Error> {
        self.area_command(Instruction::BOXSET, left, top, right, bottom)
    }

    /// Clear a box outline. Dots within the outline are unchanged.
    pub fn clear_outline(&mut self, left: u8, top: u8, right: u8, bottom: u8) -> Result<(), Error> {
        self.area_command(Instruction::BOXCLR, left, top, right, bottom)
    }

    /// Illuminate a single pixel at the cursor.
    pub fn set_pixel(&mut self) -> Result<(), Error> {
        self.write(&[Instruction::PIXSET as u8])
    }

    /// Clear a single pixel at the cursor.
    pub fn clear_pixel(&mut self) -> Result<(), Error> {
        self.write(&[Instruction::PIXCLR as u8])
    }

    /// Write graphical data, length prefixed, direct to the display. See
    /// [`Gu600::set_write_mode`] for graphic orientation and cursor
    /// movement.
    pub fn write_graphic(&mut self, data: &[u8]) -> Result<(), Error> {
        self.write_with_payload(&[Instruction::GRPWR as u8, data.len() as u8], data)
    }

    /// Reset the display to its power-on defaults.
    pub fn reset(&mut self) -> Result<(), Error> {
        self.write(&[Instruction::RESET as u8])
    }

    /// Set the write mode.
    pub fn set_write_mode(
        &mut self,
        orientation: GraphicOrientation,
        movement: CursorMovement,
        direction: CursorDirection,
        underscore: UnderscoreCursor,
        pen: PenType,
    ) -> Result<(), Error> {
        let mode = ((orientation as u8) << 7)
            | ((movement as u8) << 6)
            | ((direction as u8) << 5)
            | ((underscore as u8) << 3)
            | pen as u8;
        self.write(&[Instruction::WRMODE as u8, mode])
    }

    /// Send macro data to EEPROM. Macro 0 is executed at power-up only.
    /// The display may flicker whilst macro data is written.
    pub fn set_macro(&mut self, number: u8, data: &[u8]) -> Result<(), Error> {
        self.write_with_payload(
            &[
                Instruction::ESC as u8,
                minmax(0, number, 7),
                data.len() as u8,
            ],
            data,
        )
    }

    /// Select one of the eight brightness levels.
    pub fn set_brightness(&mut self, level: u8) -> Result<(), Error> {
        self.write(&[
            Instruction::ESC as u8,
            BRIGHTNESS_BASE + minmax(0, level, BRIGHTNESS_LEVELS - 1),
        ])
    }

    /// Clear all downloaded macros in EEPROM. The screen may blank
    /// momentarily while macro data is erased.
    pub fn erase_macros(&mut self) -> Result<(), Error> {
        self.esc_command(EscInstruction::MACERASE)
    }

    /// Lock the non-volatile EEPROM against changes until
    /// [`Gu600::unlock_eeprom`] is executed.
    pub fn lock_eeprom(&mut self) -> Result<(), Error> {
        self.esc_command(EscInstruction::LOCK)
    }

    /// Unlock the EEPROM to permit configuration data being sent.
    pub fn unlock_eeprom(&mut self) -> Result<(), Error> {
        self.esc_command(EscInstruction::UNLOCK)
    }

    /// Request the lower 8 bits of the running checksum of all received
    /// data. The checksum clears after transmission.
    pub fn request_checksum(&mut self) -> Result<(), Error> {
        self.esc_command(EscInstruction::CHKSUM)
    }

    /// Turn on the VFD power supply (default).
    pub fn power_on(&mut self) -> Result<(), Error> {
        self.esc_command(EscInstruction::PWRON)
    }

    /// Turn off the VFD power supply. The display's contents are preserved.
    pub fn power_off(&mut self) -> Result<(), Error> {
        self.esc_command(EscInstruction::PWROFF)
    }

    /// Enable hex receive mode; character 0x60 is interpreted as a
    /// hexadecimal prefix.
    pub fn hex_mode(&mut self) -> Result<(), Error> {
        self.esc_command(EscInstruction::HEX)
    }

    /// Disable hex receive mode.
    pub fn binary_mode(&mut self) -> Result<(), Error> {
        self.esc_command(EscInstruction::BIN)
    }

    /// Set the asynchronous serial communications parameters. Takes effect
    /// at power-up or hardware reset.
    pub fn set_serial_config(
        &mut self,
        automatic_send: AutomaticSend,
        packet_mode: PacketMode,
        comms_buffer: CommsBuffer,
        parity: Parity,
        baud_rate: BaudRate,
    ) -> Result<(), Error> {
        let config = ((automatic_send as u8) << 7)
            | ((packet_mode as u8) << 6)
            | ((comms_buffer as u8) << 5)
            | ((parity as u8) << 3)
            | baud_rate as u8;
        self.write(&[
            Instruction::ESC as u8,
            EscInstruction::SERIAL as u8,
            config,
        ])
    }

    /// Set the I/O port direction. A 1 marks an input, a 0 an output.
    /// Output lines are immediately set low; input lines have their
    /// pull-ups enabled. Stored in EEPROM and applied at power-up.
    pub fn set_port_direction(&mut self, direction: u8) -> Result<(), Error> {
        self.write(&[
            Instruction::ESC as u8,
            EscInstruction::PORTDIR as u8,
            direction,
        ])
    }

    /// Set the output lines on the I/O port. A 1 puts 5V on an output, or
    /// enables the pull-up on an input.
    pub fn set_port_lines(&mut self, lines: u8) -> Result<(), Error> {
        self.write(&[Instruction::ESC as u8, EscInstruction::PORTOUT as u8, lines])
    }

    /// Request the current I/O port status. The module transmits a single
    /// byte showing the state of the lines.
    pub fn read_port(&mut self) -> Result<(), Error> {
        self.esc_command(EscInstruction::PORTRD)
    }

    /// Set the I/O port to key scanning. Stored in EEPROM and applied at
    /// power-up.
    pub fn enable_key_scanning(&mut self) -> Result<(), Error> {
        self.esc_command(EscInstruction::KEYSCAN)
    }

    /// Select one of the base fonts.
    pub fn select_font(&mut self, face: FontFace) -> Result<(), Error> {
        self.write(&[face as u8])
    }

    /// Write graphic data within the defined area. See
    /// [`Gu600::set_write_mode`] for graphic orientation and cursor
    /// movement.
    pub fn write_graphic_area(
        &mut self,
        left: u8,
        top: u8,
        right: u8,
        bottom: u8,
        data: &[u8],
    ) -> Result<(), Error> {
        self.write_with_payload(
            &[Instruction::AREAWR as u8, left, top, right, bottom],
            data,
        )
    }

    /// Display a character from the selected font.
    pub fn write_character(&mut self, character: u8) -> Result<(), Error> {
        self.write(&[minmax(0x20, character, 0xFF)])
    }

    /// Select window 1, so that window and area commands operate on the
    /// underlying data or text scroll.
    pub fn select_window1(&mut self) -> Result<(), Error> {
        self.esc_command(EscInstruction::WIN1)
    }

    /// Select window 2, so that window and area commands operate on the
    /// underlying data.
    pub fn select_window2(&mut self) -> Result<(), Error> {
        self.esc_command(EscInstruction::WIN2)
    }

    /// Define the window co-ordinates.
    pub fn define_window(
        &mut self,
        left: u8,
        top: u8,
        right: u8,
        bottom: u8,
    ) -> Result<(), Error> {
        self.write(&[
            Instruction::ESC as u8,
            EscInstruction::WINDEF as u8,
            left,
            top,
            right,
            bottom,
        ])
    }

    /// Set the mode of the selected window.
    pub fn set_window_mode(&mut self, mode: WindowMode) -> Result<(), Error> {
        self.write(&[
            Instruction::ESC as u8,
            EscInstruction::PORTRD as u8,
            mode as u8,
        ])
    }

    /// Make the selected window visible.
    pub fn show_window(&mut self) -> Result<(), Error> {
        self.esc_command(EscInstruction::WINSHOW)
    }

    /// Destroy the selected window. Any scroll, flash and wipe effects are
    /// stopped.
    pub fn kill_window(&mut self) -> Result<(), Error> {
        self.esc_command(EscInstruction::WINKILL)
    }

    /// Flash the selected window's underlying data `count` times. 0xFF
    /// flashes indefinitely; 0 stops flashing.
    pub fn flash_window(&mut self, count: u8) -> Result<(), Error> {
        self.write(&[
            Instruction::ESC as u8,
            EscInstruction::WINFLASH as u8,
            count,
        ])
    }

    /// Set the flash rate of the selected window.
    pub fn set_window_flash_speed(
        &mut self,
        flash_on: FlashTime,
        flash_off: FlashTime,
    ) -> Result<(), Error> {
        let speed = ((flash_on as u8) << 4) | flash_off as u8;
        self.write(&[
            Instruction::ESC as u8,
            EscInstruction::FLASHSPD as u8,
            speed,
        ])
    }

    /// Perform a wipe action on the selected window's underlying data.
    pub fn set_window_wipe_effect(&mut self, effect: WipeEffect) -> Result<(), Error> {
        self.write(&[
            Instruction::ESC as u8,
            EscInstruction::WIPE as u8,
            effect as u8,
        ])
    }

    /// Set the wipe effect speed for the selected window.
    pub fn set_window_wipe_speed(&mut self, speed: WipeSpeed) -> Result<(), Error> {
        self.write(&[
            Instruction::ESC as u8,
            EscInstruction::WIPESPD as u8,
            speed as u8,
        ])
    }

    /// Select a pre-defined pattern for the selected window.
    pub fn select_window_pattern(&mut self, pattern: PatternType) -> Result<(), Error> {
        self.write(&[
            Instruction::ESC as u8,
            EscInstruction::PATSEL as u8,
            pattern as u8,
        ])
    }

    /// Define a user 16x16 pixel pattern for the selected window. The data
    /// must be exactly 32 bytes, in vertical format with D7 uppermost.
    pub fn set_window_pattern_data(&mut self, pattern: &[u8]) -> Result<(), Error> {
        if pattern.len() != PATTERN_DATA_SIZE {
            return Err(Error::PatternSize);
        }
        self.write_with_payload(
            &[Instruction::AREAWR as u8, EscInstruction::PATDATA as u8],
            pattern,
        )
    }

    /// Set the pattern options of the selected window.
    pub fn set_window_pattern_option(
        &mut self,
        invert: InvertPattern,
        alignment: PatternAlignment,
        align_v: PatternAlignV,
        align_h: PatternAlignH,
    ) -> Result<(), Error> {
        let option = ((invert as u8) << 3)
            | ((alignment as u8) << 2)
            | ((align_v as u8) << 1)
            | align_h as u8;
        self.write(&[
            Instruction::ESC as u8,
            EscInstruction::PATOPT as u8,
            option,
        ])
    }

    /// Scroll text data within the area defined by window 1. The text is
    /// taken as given, with 0x00 signalling its end.
    pub fn scroll_text_in_window(
        &mut self,
        pad: PadEndOfText,
        contents: ScrollContents,
        direction: ScrollDirection,
        count: u8,
        text: &[u8],
    ) -> Result<(), Error> {
        let option = ((pad as u8) << 5) | ((contents as u8) << 4) | direction as u8;
        self.write_with_payload(
            &[
                Instruction::ESC as u8,
                EscInstruction::SCROLL as u8,
                option,
                count,
            ],
            text,
        )
    }

    /// Set the window 1 scroll speed.
    pub fn set_scroll_speed(&mut self, speed: ScrollSpeed) -> Result<(), Error> {
        self.write(&[
            Instruction::ESC as u8,
            EscInstruction::SCROLLSPD as u8,
            speed as u8,
        ])
    }

    /// Select an extended font.
    pub fn select_extended_font(
        &mut self,
        face: ExtendedFontFace,
        proportion: FontProportion,
        space: FontSpace,
    ) -> Result<(), Error> {
        let font = ((space as u8) << 4) | ((proportion as u8) << 3) | face as u8;
        self.write(&[Instruction::ESC as u8, EscInstruction::EXTFONT as u8, font])
    }

    /// Draw a line from the cursor to the given position. The cursor moves
    /// to the end of the line.
    pub fn draw_line(&mut self, x: u8, y: u8) -> Result<(), Error> {
        self.write(&[Instruction::ESC as u8, EscInstruction::LINE as u8, x, y])
    }

    /// Perform an automatic fade to the given luminance.
    pub fn set_auto_fade(
        &mut self,
        luminance: Luminance,
        fade_speed: FadeSpeed,
    ) -> Result<(), Error> {
        let fade = ((fade_speed as u8) << 4) | luminance as u8;
        self.write(&[Instruction::ESC as u8, EscInstruction::FADE as u8, fade])
    }

    /// Delay any pending commands, in multiples of a 10ms period.
    pub fn set_command_delay(&mut self, delay: u8) -> Result<(), Error> {
        self.write(&[Instruction::ESC as u8, EscInstruction::DELAY as u8, delay])
    }

    /// Write text at the given cursor position. Character codes are the
    /// bytes of `text`; no encoding conversion is performed.
    pub fn write_text(&mut self, x: u8, y: u8, text: &str) -> Result<(), Error> {
        self.write_with_payload(&[Instruction::POSSET as u8, x, y], text.as_bytes())
    }

    fn esc_command(&mut self, code: EscInstruction) -> Result<(), Error> {
        self.write(&[Instruction::ESC as u8, code as u8])
    }

    fn area_command(
        &mut self,
        command: Instruction,
        left: u8,
        top: u8,
        right: u8,
        bottom: u8,
    ) -> Result<(), Error> {
        self.write(&[command as u8, left, top, right, bottom])
    }

    /// Assemble `head` followed by `payload` into a single message and send
    /// it. Rejects the message before transmission if it cannot fit.
    fn write_with_payload(&mut self, head: &[u8], payload: &[u8]) -> Result<(), Error> {
        let mut message: Vec<u8, MAX_MESSAGE_SIZE> = Vec::new();
        message
            .extend_from_slice(head)
            .map_err(|_| Error::MessageTooLong)?;
        message
            .extend_from_slice(payload)
            .map_err(|_| Error::MessageTooLong)?;
        self.write(&message)
    }
}

#[cfg(feature = "graphics")]
extern crate embedded_graphics;
#[cfg(feature = "graphics")]
use self::embedded_graphics::{draw_target::DrawTarget, pixelcolor::BinaryColor, prelude::*};

#[cfg(feature = "graphics")]
impl<T> DrawTarget for Gu600<T>
where
    T: Transport,
{
    type Error = Error;
    type Color = BinaryColor;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels.into_iter() {
            // Only draw pixels that would be on screen
            if coord.x >= 0
                && coord.y >= 0
                && coord.x < self.geometry.width as i32
                && coord.y < self.geometry.height as i32
            {
                self.set_cursor_position(coord.x as u8, coord.y as u8)?;
                if color.is_on() {
                    self.set_pixel()?;
                } else {
                    self.clear_pixel()?;
                }
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let right = (self.geometry.width - 1) as u8;
        let bottom = (self.geometry.height - 1) as u8;
        if color.is_on() {
            self.set_area(0, 0, right, bottom)
        } else {
            self.clear_area(0, 0, right, bottom)
        }
    }
}

#[cfg(feature = "graphics")]
impl<T> OriginDimensions for Gu600<T>
where
    T: Transport,
{
    fn size(&self) -> Size {
        Size::new(self.geometry.width as u32, self.geometry.height as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models;
    use crate::options::*;

    /// Transport stub that records everything it is asked to deliver.
    #[derive(Default)]
    struct Recorder {
        sent: heapless::Vec<u8, 512>,
        writes: usize,
        fail: bool,
    }

    impl Transport for Recorder {
        fn write(&mut self, message: &[u8]) -> Result<(), ()> {
            self.sent.extend_from_slice(message).unwrap();
            self.writes += 1;
            if self.fail {
                Err(())
            } else {
                Ok(())
            }
        }
    }

    fn vfd() -> Gu600<Recorder> {
        let geometry = models::geometry_for("GU240x64D-K612A8").unwrap();
        Gu600::new(Recorder::default(), geometry)
    }

    fn failing_vfd() -> Gu600<Recorder> {
        let recorder = Recorder {
            fail: true,
            ..Recorder::default()
        };
        Gu600::new(recorder, models::geometry_for("GU240x64D-K612A8").unwrap())
    }

    #[test]
    fn minmax_passes_in_range_values() {
        assert_eq!(minmax(0, 5, 7), 5);
        assert_eq!(minmax(0, 0, 7), 0);
        assert_eq!(minmax(0, 7, 7), 7);
    }

    #[test]
    fn minmax_bounds_out_of_range_values() {
        assert_eq!(minmax(0, 10, 7), 7);
        assert_eq!(minmax(3, 1, 7), 3);
        assert_eq!(minmax(0x20, 0x10, 0xFF), 0x20);
    }

    #[test]
    fn control_codes_are_single_bytes() {
        let mut vfd = vfd();
        vfd.dummy_byte().unwrap();
        vfd.backspace().unwrap();
        vfd.horizontal_tab().unwrap();
        vfd.line_feed().unwrap();
        vfd.home().unwrap();
        vfd.vertical_tab().unwrap();
        vfd.carriage_return().unwrap();
        vfd.clear_eol().unwrap();
        vfd.self_test().unwrap();
        vfd.set_pixel().unwrap();
        vfd.clear_pixel().unwrap();
        vfd.reset().unwrap();
        let recorder = vfd.release();
        assert_eq!(
            &recorder.sent[..],
            [0x00, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F, 0x16, 0x17, 0x19]
        );
        assert_eq!(recorder.writes, 12);
    }

    #[test]
    fn escape_codes_are_two_bytes() {
        let mut vfd = vfd();
        vfd.erase_macros().unwrap();
        vfd.lock_eeprom().unwrap();
        vfd.unlock_eeprom().unwrap();
        vfd.request_checksum().unwrap();
        vfd.power_on().unwrap();
        vfd.power_off().unwrap();
        vfd.hex_mode().unwrap();
        vfd.binary_mode().unwrap();
        vfd.read_port().unwrap();
        vfd.enable_key_scanning().unwrap();
        let recorder = vfd.release();
        assert_eq!(
            &recorder.sent[..],
            [
                0x1B, 0x4D, 0x1B, 0x4C, 0x1B, 0x55, 0x1B, 0x43, 0x1B, 0x50, 0x1B, 0x46, 0x1B,
                0x48, 0x1B, 0x42, 0x1B, 0x52, 0x1B, 0x4B
            ]
        );
    }

    #[test]
    fn area_commands_carry_four_coordinates() {
        let mut vfd = vfd();
        vfd.set_area(1, 2, 3, 4).unwrap();
        vfd.clear_area(5, 6, 7, 8).unwrap();
        vfd.invert_area(9, 10, 11, 12).unwrap();
        vfd.set_outline(13, 14, 15, 16).unwrap();
        vfd.clear_outline(17, 18, 19, 20).unwrap();
        let recorder = vfd.release();
        assert_eq!(
            &recorder.sent[..],
            [
                0x11, 1, 2, 3, 4, 0x12, 5, 6, 7, 8, 0x13, 9, 10, 11, 12, 0x14, 13, 14, 15, 16,
                0x15, 17, 18, 19, 20
            ]
        );
    }

    #[test]
    fn clear_all_covers_the_whole_screen() {
        let mut full = vfd();
        full.clear_all().unwrap();

        let mut explicit = vfd();
        explicit.clear_area(0, 0, 239, 63).unwrap();

        assert_eq!(&full.release().sent[..], &explicit.release().sent[..]);
    }

    #[test]
    fn brightness_levels_offset_the_select_code() {
        for level in 0..8 {
            let mut vfd = vfd();
            vfd.set_brightness(level).unwrap();
            assert_eq!(&vfd.release().sent[..], [0x1B, 0xF8 + level]);
        }
    }

    #[test]
    fn brightness_out_of_range_selects_the_top_level() {
        let mut vfd = vfd();
        vfd.set_brightness(10).unwrap();
        assert_eq!(&vfd.release().sent[..], [0x1B, 0xFF]);
    }

    #[test]
    fn write_mode_all_zero_fields() {
        let mut vfd = vfd();
        vfd.set_write_mode(
            GraphicOrientation::Horizontal,
            CursorMovement::Horizontal,
            CursorDirection::Forward,
            UnderscoreCursor::StaticOff,
            PenType::Over,
        )
        .unwrap();
        assert_eq!(&vfd.release().sent[..], [0x1A, 0x00]);
    }

    #[test]
    fn write_mode_packs_every_field() {
        let mut vfd = vfd();
        vfd.set_write_mode(
            GraphicOrientation::Vertical,
            CursorMovement::Vertical,
            CursorDirection::Backwards,
            UnderscoreCursor::FlashOn,
            PenType::Xor,
        )
        .unwrap();
        assert_eq!(&vfd.release().sent[..], [0x1A, 0xFB]);
    }

    #[test]
    fn serial_config_packs_every_field() {
        let mut vfd = vfd();
        vfd.set_serial_config(
            AutomaticSend::On,
            PacketMode::Off,
            CommsBuffer::On,
            Parity::Even,
            BaudRate::B19200,
        )
        .unwrap();
        assert_eq!(&vfd.release().sent[..], [0x1B, 0x49, 0xAA]);
    }

    #[test]
    fn graphic_write_is_length_prefixed() {
        let mut vfd = vfd();
        vfd.write_graphic(&[0x01, 0x02, 0x03]).unwrap();
        assert_eq!(&vfd.release().sent[..], [0x18, 3, 0x01, 0x02, 0x03]);
    }

    #[test]
    fn graphic_area_write_carries_raw_payload() {
        let mut vfd = vfd();
        vfd.write_graphic_area(1, 2, 20, 9, &[0xAA, 0x55]).unwrap();
        assert_eq!(&vfd.release().sent[..], [0x1F, 1, 2, 20, 9, 0xAA, 0x55]);
    }

    #[test]
    fn macro_number_is_bounded() {
        let mut vfd = vfd();
        vfd.set_macro(9, &[0xDE, 0xAD]).unwrap();
        assert_eq!(&vfd.release().sent[..], [0x1B, 7, 2, 0xDE, 0xAD]);
    }

    #[test]
    fn macro_start_is_bounded() {
        let mut vfd = vfd();
        vfd.start_macro(12).unwrap();
        assert_eq!(&vfd.release().sent[..], [0x07]);
    }

    #[test]
    fn character_codes_start_at_space() {
        let mut vfd = vfd();
        vfd.write_character(0x10).unwrap();
        vfd.write_character(b'A').unwrap();
        assert_eq!(&vfd.release().sent[..], [0x20, 0x41]);
    }

    #[test]
    fn text_follows_the_cursor_position() {
        let mut vfd = vfd();
        vfd.write_text(3, 5, "AB").unwrap();
        assert_eq!(&vfd.release().sent[..], [0x10, 3, 5, 0x41, 0x42]);
    }

    #[test]
    fn font_select_code_is_the_command() {
        let mut vfd = vfd();
        vfd.select_font(FontFace::Fixed5x7).unwrap();
        assert_eq!(&vfd.release().sent[..], [0x1D]);
    }

    #[test]
    fn extended_font_packs_every_field() {
        let mut plain = vfd();
        plain
            .select_extended_font(
                ExtendedFontFace::Font7x15A,
                FontProportion::FixedSpace,
                FontSpace::One,
            )
            .unwrap();
        assert_eq!(&plain.release().sent[..], [0x1B, 0x98, 0x03]);

        let mut spaced = vfd();
        spaced
            .select_extended_font(
                ExtendedFontFace::Font5x7C,
                FontProportion::Proportional,
                FontSpace::Three,
            )
            .unwrap();
        assert_eq!(&spaced.release().sent[..], [0x1B, 0x98, 0x2C]);
    }

    #[test]
    fn window_commands_encode_their_selectors() {
        let mut vfd = vfd();
        vfd.select_window1().unwrap();
        vfd.select_window2().unwrap();
        vfd.define_window(10, 20, 30, 40).unwrap();
        vfd.set_window_mode(WindowMode::Pattern).unwrap();
        vfd.show_window().unwrap();
        vfd.kill_window().unwrap();
        vfd.flash_window(0xFF).unwrap();
        let recorder = vfd.release();
        assert_eq!(
            &recorder.sent[..],
            [
                0x1B, 0x80, 0x1B, 0x81, 0x1B, 0x82, 10, 20, 30, 40, 0x1B, 0x52, 3, 0x1B, 0x84,
                0x1B, 0x85, 0x1B, 0x86, 0xFF
            ]
        );
    }

    #[test]
    fn flash_speed_packs_on_and_off_times() {
        let mut vfd = vfd();
        vfd.set_window_flash_speed(FlashTime::Ms100, FlashTime::Ms500)
            .unwrap();
        assert_eq!(&vfd.release().sent[..], [0x1B, 0x87, 0x38]);
    }

    #[test]
    fn wipe_commands_encode_their_selectors() {
        let mut vfd = vfd();
        vfd.set_window_wipe_effect(WipeEffect::BottomToTopUncover)
            .unwrap();
        vfd.set_window_wipe_speed(WipeSpeed::Px315).unwrap();
        let recorder = vfd.release();
        assert_eq!(&recorder.sent[..], [0x1B, 0x88, 0x07, 0x1B, 0x89, 0x10]);
    }

    #[test]
    fn pattern_option_packs_every_field() {
        let mut vfd = vfd();
        vfd.set_window_pattern_option(
            InvertPattern::On,
            PatternAlignment::Off,
            PatternAlignV::Top,
            PatternAlignH::Left,
        )
        .unwrap();
        assert_eq!(&vfd.release().sent[..], [0x1B, 0x8F, 0x0B]);
    }

    #[test]
    fn pattern_data_passes_through_unchanged() {
        let pattern: [u8; 32] = [
            0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D,
            0x0E, 0x0F, 0xF0, 0xE1, 0xD2, 0xC3, 0xB4, 0xA5, 0x96, 0x87, 0x78, 0x69, 0x5A, 0x4B,
            0x3C, 0x2D, 0x1E, 0x0F,
        ];
        let mut vfd = vfd();
        vfd.set_window_pattern_data(&pattern).unwrap();
        let recorder = vfd.release();
        assert_eq!(&recorder.sent[..2], [0x1F, 0x8E]);
        assert_eq!(&recorder.sent[2..], pattern);
    }

    #[test]
    fn pattern_data_of_wrong_size_is_rejected_before_sending() {
        let mut vfd = vfd();
        assert_eq!(
            vfd.set_window_pattern_data(&[0u8; 31]),
            Err(Error::PatternSize)
        );
        assert_eq!(
            vfd.set_window_pattern_data(&[0u8; 33]),
            Err(Error::PatternSize)
        );
        let recorder = vfd.release();
        assert_eq!(recorder.writes, 0);
        assert!(recorder.sent.is_empty());
    }

    #[test]
    fn oversized_payload_is_rejected_before_sending() {
        let mut vfd = vfd();
        assert_eq!(vfd.write_graphic(&[0u8; 300]), Err(Error::MessageTooLong));
        let recorder = vfd.release();
        assert_eq!(recorder.writes, 0);
        assert!(recorder.sent.is_empty());
    }

    #[test]
    fn scroll_text_packs_options_and_appends_text() {
        let mut vfd = vfd();
        vfd.scroll_text_in_window(
            PadEndOfText::On,
            ScrollContents::Off,
            ScrollDirection::Left,
            1,
            b"HI\x00",
        )
        .unwrap();
        assert_eq!(
            &vfd.release().sent[..],
            [0x1B, 0x90, 0x22, 1, 0x48, 0x49, 0x00]
        );
    }

    #[test]
    fn scroll_speed_encodes_its_selector() {
        let mut vfd = vfd();
        vfd.set_scroll_speed(ScrollSpeed::Px105).unwrap();
        assert_eq!(&vfd.release().sent[..], [0x1B, 0x91, 0x03]);
    }

    #[test]
    fn auto_fade_packs_speed_above_luminance() {
        let mut vfd = vfd();
        vfd.set_auto_fade(Luminance::Full, FadeSpeed::Slowest).unwrap();
        assert_eq!(&vfd.release().sent[..], [0x1B, 0x9C, 0x37]);
    }

    #[test]
    fn line_and_delay_carry_their_parameters() {
        let mut vfd = vfd();
        vfd.draw_line(100, 50).unwrap();
        vfd.set_command_delay(25).unwrap();
        vfd.set_cursor_position(7, 9).unwrap();
        let recorder = vfd.release();
        assert_eq!(
            &recorder.sent[..],
            [0x1B, 0x9A, 100, 50, 0x1B, 0x9F, 25, 0x10, 7, 9]
        );
    }

    #[test]
    fn port_commands_carry_their_masks() {
        let mut vfd = vfd();
        vfd.set_port_direction(0b1010_0101).unwrap();
        vfd.set_port_lines(0b0000_1111).unwrap();
        let recorder = vfd.release();
        assert_eq!(&recorder.sent[..], [0x1B, 0x44, 0xA5, 0x1B, 0x4F, 0x0F]);
    }

    #[test]
    fn failure_is_reported_after_encoding() {
        let mut vfd = failing_vfd();
        assert_eq!(vfd.clear_all(), Err(Error::Comms));
        assert_eq!(vfd.set_brightness(3), Err(Error::Comms));
        assert_eq!(vfd.write_text(0, 0, "A"), Err(Error::Comms));
        let recorder = vfd.release();
        // Every message was fully formed and handed over before the
        // failure came back.
        assert_eq!(
            &recorder.sent[..],
            [0x12, 0, 0, 239, 63, 0x1B, 0xFB, 0x10, 0, 0, 0x41]
        );
        assert_eq!(recorder.writes, 3);
    }

    #[cfg(feature = "graphics")]
    #[test]
    fn pixels_draw_through_the_cursor() {
        let mut vfd = vfd();
        vfd.draw_iter([
            Pixel(Point::new(3, 5), BinaryColor::On),
            Pixel(Point::new(4, 5), BinaryColor::Off),
            Pixel(Point::new(-1, 5), BinaryColor::On),
            Pixel(Point::new(0, 64), BinaryColor::On),
        ])
        .unwrap();
        assert_eq!(&vfd.release().sent[..], [0x10, 3, 5, 0x16, 0x10, 4, 5, 0x17]);
    }

    #[cfg(feature = "graphics")]
    #[test]
    fn clear_maps_to_the_area_commands() {
        let mut vfd = vfd();
        DrawTarget::clear(&mut vfd, BinaryColor::On).unwrap();
        DrawTarget::clear(&mut vfd, BinaryColor::Off).unwrap();
        assert_eq!(
            &vfd.release().sent[..],
            [0x11, 0, 0, 239, 63, 0x12, 0, 0, 239, 63]
        );
    }

    #[cfg(feature = "graphics")]
    #[test]
    fn size_reports_the_geometry() {
        let vfd = vfd();
        assert_eq!(vfd.size(), Size::new(240, 64));
    }
}
