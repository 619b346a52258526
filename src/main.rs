use line_crossing::mask::MaskU8;
use line_crossing::{CounterParams, ErrorMessage, FrameCooldown, LineCrossingCounter};

const WIDTH: usize = 80;
const HEIGHT: usize = 60;
/// Columns the object moves per frame.
const SPEED: isize = 8;
/// Object width in columns.
const SIZE: usize = 6;
/// Frames the gate stays closed after a counted crossing.
const COOLDOWN_FRAMES: u32 = 8;

/// Renders a `w` x `h` mask with a solid object covering columns
/// `[left, left + size)` and the middle half of the rows.
fn object_mask(w: usize, h: usize, left: isize, size: usize) -> Vec<u8> {
    let mut data = vec![0u8; w * h];
    for y in h / 4..3 * h / 4 {
        for dx in 0..size {
            let x = left + dx as isize;
            if x >= 0 && (x as usize) < w {
                data[y * w + x as usize] = 255;
            }
        }
    }
    data
}

/// Left column of the object on each frame: across the line and back.
fn walk() -> impl Iterator<Item = isize> {
    let steps = WIDTH as isize / SPEED + 1;
    let back_start = (WIDTH - 4) as isize;
    (0..steps)
        .map(|i| i * SPEED)
        .chain((0..steps).map(move |i| back_start - i * SPEED))
}

/// Runs the synthetic walk and returns `(left_to_right, right_to_left)`.
fn run_demo(verbose: bool) -> (u32, u32) {
    let mut counter = LineCrossingCounter::with_capabilities(
        CounterParams::default(),
        FrameCooldown::new(COOLDOWN_FRAMES),
        ErrorMessage::new(),
    );
    counter.line_at(0.5);

    for (frame, left) in walk().enumerate() {
        counter.gate_mut().advance();
        let data = object_mask(WIDTH, HEIGHT, left, SIZE);
        if !counter.update(&MaskU8::new(WIDTH, HEIGHT, &data)) {
            eprintln!("frame {frame}: {}", counter.errors().message());
            continue;
        }
        if counter.crossed_left_to_right() && verbose {
            println!("frame {frame}: crossed left -> right");
        }
        if counter.crossed_right_to_left() && verbose {
            println!("frame {frame}: crossed right -> left");
        }
    }
    if verbose {
        println!("{}", counter.debug());
    }
    (counter.left_to_right_count(), counter.right_to_left_count())
}

fn main() {
    env_logger::init();

    // Demo stub: an object walks across the line and back on a fake mask
    let (left_to_right, right_to_left) = run_demo(true);
    println!("left_to_right={left_to_right} right_to_left={right_to_left}");
}
