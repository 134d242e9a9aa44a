//! # `WaveSketch`
//!
//! `wavesketch` is a small drawing pad for sound: sketch a waveform with the
//! mouse and hear one period of it looped through the speakers as a 16-bit
//! tone.
//!
//! Controls:
//! * Drag on the canvas to draw, `C` to clear.
//! * `Space` or `P` to play, `S` to stop, `Esc` to quit.
//! * The gauge on the right (click or drag), `Up`/`Down` for single hertz,
//!   and `PageUp`/`PageDown` for whole octaves set the tone frequency.

use std::time::Duration;

use sdl2::{event::Event, keyboard::Keycode};
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::audio::Speaker;
use crate::command::Command;
use crate::controller::Controller;
use crate::quirks::ColumnScanQuirk;

pub mod sketch;
pub mod synth;
pub mod pcm;
pub mod audio;
pub mod command;
pub mod controller;
pub mod quirks;

const GAUGE_WIDTH: u32 = 32;
#[allow(clippy::cast_possible_truncation)]
const WINDOW_WIDTH: u32 = sketch::WIDTH as u32 + GAUGE_WIDTH;
#[allow(clippy::cast_possible_truncation)]
const WINDOW_HEIGHT: u32 = sketch::HEIGHT as u32;

const BACKGROUND: Color = Color::RGB(255, 255, 255);
const ZERO_AXIS: Color = Color::RGB(220, 60, 60);
const INK: Color = Color::RGB(0, 0, 0);
const GAUGE_TRACK: Color = Color::RGB(230, 230, 230);
const GAUGE_TICKS: Color = Color::RGB(160, 160, 160);
const GAUGE_HANDLE: Color = Color::RGB(40, 90, 200);

const OCTAVE_MARK_FREQUENCIES_HZ: [u32; 6] = [55, 110, 220, 440, 880, 1_760];

/// Runs the drawing pad.
/// Returns either an `Ok` signifying the process ended successfully or an `Err` containing a `String` which mentions the issue.
///
/// # Parameters
///
/// * `frequency_hz` - The starting tone frequency.
/// * `column_scan` - How synthesis maps sample indices to sketch columns.
///
/// # Errors
///
/// Returns an `Err` if any SDL system cannot be initialized. Play and stop
/// failures (an unplayable frequency, an unavailable audio device) are
/// reported on stderr and do not end the program.
pub fn run(frequency_hz: u32, column_scan: ColumnScanQuirk) -> Result<(), String> {
    // Initialize SDL
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    // Create the window
    let window = video_subsystem.window("WaveSketch", WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .build()
        .map_err(|window_build_error| window_build_error.to_string())?;

    // Prepare the canvas
    let mut canvas = window.into_canvas()
        .build()
        .map_err(|integer_or_sdl_error| integer_or_sdl_error.to_string())?;

    // Prepare the audio. The speaker opens its device on the first play, so
    // a missing audio device never takes the drawing surface down with it.
    let audio_subsystem = sdl_context.audio()?;
    let speaker = Speaker::new(audio_subsystem, pcm::FORMAT);

    // Prepare for events
    let mut event_pump = sdl_context.event_pump()?;

    // Prepare the program state
    let mut controller = Controller::with_speaker(frequency_hz, column_scan, speaker);

    // The main loop
    'event_loop: loop {
        // Go through each event and handle them
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } |
                Event::KeyDown { keycode: Some(Keycode::Escape), .. } => {
                    break 'event_loop;
                },
                event => {
                    if let Some(command) = Command::from_event(&event) {
                        if let Err(command_error) = controller.handle_command(command) {
                            eprintln!("{command_error}");
                        }
                    }
                }
            }
        }

        // Draw the frame
        render_frame(&mut canvas, &controller)?;

        // Wait the requisite time for the next iteration. Effectively sets it to 60fps / 60Hz.
        std::thread::sleep(Duration::new(0, 1_000_000_000u32 / 60));
    }

    // Return success
    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
fn render_frame(canvas: &mut Canvas<Window>, controller: &Controller) -> Result<(), String> {
    canvas.set_draw_color(BACKGROUND);
    canvas.clear();

    // The zero-amplitude axis
    canvas.set_draw_color(ZERO_AXIS);
    let axis_y = (sketch::HEIGHT / 2) as i32;
    canvas.draw_line(Point::new(0, axis_y), Point::new(sketch::WIDTH as i32 - 1, axis_y))?;

    // The sketch itself
    canvas.set_draw_color(INK);
    for y in 0..sketch::HEIGHT {
        for x in 0..sketch::WIDTH {
            if controller.sketch().is_filled(x, y) {
                canvas.draw_point(Point::new(x as i32, y as i32))?;
            }
        }
    }

    render_gauge(canvas, controller.frequency_hz())?;

    canvas.present();
    Ok(())
}

#[allow(clippy::cast_possible_wrap)]
fn render_gauge(canvas: &mut Canvas<Window>, frequency_hz: u32) -> Result<(), String> {
    canvas.set_draw_color(GAUGE_TRACK);
    canvas.fill_rect(Rect::new(command::GAUGE_LEFT_EDGE, 0, GAUGE_WIDTH, WINDOW_HEIGHT))?;

    // Tick marks at the octaves of the lowest supported frequency
    canvas.set_draw_color(GAUGE_TICKS);
    let tick_inset = 6;
    for mark_hz in OCTAVE_MARK_FREQUENCIES_HZ {
        let y = command::gauge_position(mark_hz);
        canvas.draw_line(
            Point::new(command::GAUGE_LEFT_EDGE + tick_inset, y),
            Point::new(command::GAUGE_LEFT_EDGE + GAUGE_WIDTH as i32 - 1 - tick_inset, y),
        )?;
    }

    // The handle at the selected frequency
    canvas.set_draw_color(GAUGE_HANDLE);
    let handle_y = command::gauge_position(frequency_hz);
    canvas.fill_rect(Rect::new(command::GAUGE_LEFT_EDGE, handle_y - 1, GAUGE_WIDTH, 3))?;

    Ok(())
}
