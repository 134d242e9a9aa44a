//! A module to contain the commands a user can issue and their translation
//! from raw SDL2 events.
//! Keeping the translation separate from the state changes means every
//! mutation of the program goes through one tagged command value.

use line_2d::Coord;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;

use crate::controller::{FREQUENCY_MAX_HZ, FREQUENCY_MIN_HZ};
use crate::sketch;

#[allow(clippy::cast_possible_truncation)]
pub(crate) const GAUGE_LEFT_EDGE: i32 = sketch::WIDTH as i32;

/// Everything a user gesture can ask the program to do.
#[derive(PartialEq, Debug)]
pub enum Command {
    /// Start a stroke at a point.
    BeginStroke(Coord),

    /// Extend the current stroke to a point, drawing the connecting segment.
    StrokeTo(Coord),

    /// Finish the current stroke.
    EndStroke,

    /// Reset every sketch cell.
    Clear,

    /// Synthesize the sketch at the current frequency and loop it.
    Play,

    /// Pause playback.
    Stop,

    /// Jump the frequency to a value in hertz.
    SetFrequency(u32),

    /// Nudge the frequency by whole hertz.
    StepFrequency(i32),

    /// Double or halve the frequency.
    StepOctave(i32),
}

impl Command {
    /// Translates an SDL2 event into a command, if the event maps to one.
    /// Pointer events left of the gauge act on the sketch; on the gauge they
    /// set the frequency.
    #[must_use]
    pub fn from_event(event: &Event) -> Option<Command> {
        match event {
            Event::MouseButtonDown { mouse_btn: MouseButton::Left, x, y, .. } => {
                Some(Self::pointer_pressed(*x, *y))
            }
            Event::MouseMotion { mousestate, x, y, .. } if mousestate.left() => {
                Some(Self::pointer_dragged(*x, *y))
            }
            Event::MouseButtonUp { mouse_btn: MouseButton::Left, .. } => Some(Command::EndStroke),
            Event::KeyDown { keycode: Some(keycode), .. } => Self::for_key(*keycode),
            _ => None,
        }
    }

    fn pointer_pressed(x: i32, y: i32) -> Command {
        if x < GAUGE_LEFT_EDGE {
            Command::BeginStroke(Coord::new(x, y))
        } else {
            Command::SetFrequency(gauge_frequency(y))
        }
    }

    fn pointer_dragged(x: i32, y: i32) -> Command {
        if x < GAUGE_LEFT_EDGE {
            Command::StrokeTo(Coord::new(x, y))
        } else {
            Command::SetFrequency(gauge_frequency(y))
        }
    }

    fn for_key(keycode: Keycode) -> Option<Command> {
        match keycode {
            Keycode::Space | Keycode::P => Some(Command::Play),
            Keycode::S => Some(Command::Stop),
            Keycode::C => Some(Command::Clear),
            Keycode::Up => Some(Command::StepFrequency(1)),
            Keycode::Down => Some(Command::StepFrequency(-1)),
            Keycode::PageUp => Some(Command::StepOctave(1)),
            Keycode::PageDown => Some(Command::StepOctave(-1)),
            _ => None,
        }
    }
}

/// The frequency selected by clicking the gauge at a height. The mapping is
/// linear with the highest frequency at the top, like a vertical slider.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn gauge_frequency(y: i32) -> u32 {
    let highest_y = (sketch::HEIGHT - 1) as i32;
    let clamped_y = y.clamp(0, highest_y);
    let fraction = 1.0 - f64::from(clamped_y) / f64::from(highest_y);
    let span = f64::from(FREQUENCY_MAX_HZ - FREQUENCY_MIN_HZ);
    FREQUENCY_MIN_HZ + (fraction * span).round() as u32
}

/// The gauge height where a frequency's handle is drawn. Inverse of
/// [`gauge_frequency`] up to pixel rounding.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub(crate) fn gauge_position(frequency_hz: u32) -> i32 {
    let clamped = frequency_hz.clamp(FREQUENCY_MIN_HZ, FREQUENCY_MAX_HZ);
    let fraction = f64::from(clamped - FREQUENCY_MIN_HZ) / f64::from(FREQUENCY_MAX_HZ - FREQUENCY_MIN_HZ);
    let highest_y = (sketch::HEIGHT - 1) as f64;
    ((1.0 - fraction) * highest_y).round() as i32
}
