#[cfg(not(feature = "streaming"))]
fn main() {
    eprintln!(
        "The gbasound demo requires the \"streaming\" feature. Rebuild with `--features streaming` to enable playback."
    );
}

#[cfg(feature = "streaming")]
mod demo {
    use std::env;
    use std::io::{self, BufRead};
    use std::sync::mpsc;
    use std::sync::Arc;
    use std::thread;
    use std::time::{Duration, Instant};

    use gbasound::constants::{CPU_CLOCK, REFRESH_CYCLES, SAMPLE_RATE};
    use gbasound::hardware::DirectSound;
    use gbasound::playback::{InputLoop, PlaybackController, VblankMonitor};
    use gbasound::{AudioDevice, Keys, Result, RingBuffer, Track};

    /// Keep roughly a quarter second of stereo samples buffered
    const RING_CAPACITY: usize = 16 * 1024;

    enum Command {
        Press(Keys),
        Quit,
    }

    fn load_track() -> Result<Track> {
        let args: Vec<String> = env::args().collect();
        match args.as_slice() {
            [_, left, right] => Track::load(left, right),
            _ => Ok(Track::sine(440.0, 4.0)),
        }
    }

    /// Map stdin lines to momentary button presses
    fn spawn_stdin_reader() -> mpsc::Receiver<Command> {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                let command = match line.trim() {
                    "a" | "A" => Command::Press(Keys::A),
                    "b" | "B" => Command::Press(Keys::B),
                    "q" | "Q" => Command::Quit,
                    _ => continue,
                };
                let quit = matches!(command, Command::Quit);
                if tx.send(command).is_err() || quit {
                    break;
                }
            }
            let _ = tx.send(Command::Quit);
        });
        rx
    }

    pub fn run() -> Result<()> {
        let track = load_track()?;
        println!("gbasound - near CD quality");
        println!("     GBA audio demo");
        println!();
        println!("  type 'a' + Enter to play music");
        println!("  type 'b' + Enter to stop music");
        println!("  type 'q' + Enter to quit");
        println!();
        println!(
            "track: {} samples ({:.1}s)",
            track.len_samples(),
            track.duration_seconds()
        );

        let ring_buffer = Arc::new(RingBuffer::new(RING_CAPACITY)?);
        let device = AudioDevice::new(SAMPLE_RATE, Arc::clone(&ring_buffer))?;
        let commands = spawn_stdin_reader();

        let mut controller = PlaybackController::new(DirectSound::new(), track);
        let monitor = VblankMonitor::new();
        let mut input = InputLoop::new();

        // One vblank worth of interleaved stereo frames
        let mut chunk = vec![0.0f32; monitor.per_tick() as usize * 2];
        let refresh_period = Duration::from_secs_f64(REFRESH_CYCLES / CPU_CLOCK as f64);
        let mut next_vblank = Instant::now();

        'main: loop {
            // Wait for the next (simulated) vblank
            next_vblank += refresh_period;
            let now = Instant::now();
            if next_vblank > now {
                thread::sleep(next_vblank - now);
            }

            // Collect the buttons pressed since the last refresh
            let mut raw = Keys::empty();
            for command in commands.try_iter() {
                match command {
                    Command::Press(keys) => raw |= keys,
                    Command::Quit => break 'main,
                }
            }

            // Interrupt side first, then the polling loop
            let was_playing = controller.is_playing();
            monitor.tick(&mut controller);
            if was_playing && !controller.is_playing() {
                println!("track exhausted, stopped");
            }
            input.poll(raw, &mut controller);

            controller.sink_mut().generate_samples_into(&mut chunk);
            ring_buffer.write(&chunk);
        }

        device.finish();
        Ok(())
    }
}

#[cfg(feature = "streaming")]
fn main() {
    if let Err(err) = demo::run() {
        eprintln!("gbasound demo failed: {err}");
        std::process::exit(1);
    }
}
