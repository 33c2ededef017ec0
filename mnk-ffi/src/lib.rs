//! C bindings for the engine, declared in `include/mnk.h`.
//!
//! A board handle is a boxed [`Game`]. All functions accept a null handle and
//! treat it as a board on which every move is invalid.

use std::ffi::{c_uchar, c_uint};

use mnk::Game;
use tracing::warn;

#[no_mangle]
pub extern "C" fn init_board(m: c_uint, n: c_uint, k: c_uint) -> *mut Game {
    let game = Game::permissive(m as usize, n as usize, k as usize);
    Box::into_raw(Box::new(game))
}

/// Returns one of the status codes in [`mnk::MoveOutcome::status_code()`].
///
/// # Safety
///
/// `board` must be null or a live handle from [`init_board()`], not used by
/// another thread at the same time. `xout` and `yout` must each be null or
/// valid for writes.
#[no_mangle]
pub unsafe extern "C" fn make_move(
    board: *mut Game,
    x: c_uint,
    y: c_uint,
    xout: *mut c_uint,
    yout: *mut c_uint,
) -> c_uchar {
    let Some(game) = board.as_mut() else {
        warn!("make_move() called without a board");
        return mnk::INVALID_MOVE;
    };
    let outcome = game.make_move(x as usize, y as usize);
    if let Some(ai_move) = outcome.ai_move() {
        // The opponent only plays on the board, whose size came in as c_uint
        if let Some(xout) = xout.as_mut() {
            *xout = ai_move.x as c_uint;
        }
        if let Some(yout) = yout.as_mut() {
            *yout = ai_move.y as c_uint;
        }
    }
    outcome.status_code()
}

/// # Safety
///
/// `board` must be null or a live handle from [`init_board()`].
#[no_mangle]
pub unsafe extern "C" fn print_board(board: *const Game) {
    if let Some(game) = board.as_ref() {
        println!("{}", game);
    }
}

/// # Safety
///
/// `board` must be null or a live handle from [`init_board()`]. It is invalid afterwards.
#[no_mangle]
pub unsafe extern "C" fn destroy_board(board: *mut Game) {
    if !board.is_null() {
        drop(Box::from_raw(board));
    }
}
