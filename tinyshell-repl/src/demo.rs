//! Demo modules registered by the REPL host
//!
//! `gpio` drives a bank of simulated pins, `sys` holds small utilities.

use std::sync::atomic::{AtomicU8, Ordering};

use tinyshell::prelude::*;
use tracing::info;

pub const PIN_COUNT: usize = 16;

/// Application status: pin index outside the bank
pub const BAD_PIN: Status = 1;

static PINS: [AtomicU8; PIN_COUNT] = [const { AtomicU8::new(0) }; PIN_COUNT];

fn pin(index: u8) -> Option<&'static AtomicU8> {
    PINS.get(usize::from(index))
}

fn gpio_set(index: u8, value: u8) -> Status {
    let Some(p) = pin(index) else {
        return BAD_PIN;
    };
    p.store(value, Ordering::Relaxed);
    info!(pin = index, value, "pin set");
    status::OK
}

fn gpio_get(index: u8) -> Status {
    let Some(p) = pin(index) else {
        return BAD_PIN;
    };
    info!(pin = index, value = p.load(Ordering::Relaxed), "pin read");
    status::OK
}

fn gpio_toggle(index: u8) -> Status {
    let Some(p) = pin(index) else {
        return BAD_PIN;
    };
    let value = p.fetch_xor(1, Ordering::Relaxed) ^ 1;
    info!(pin = index, value, "pin toggled");
    status::OK
}

fn sys_echo(text: String) -> Status {
    info!(%text, "echo");
    status::OK
}

fn sys_add(a: i32, b: i32) -> Status {
    match a.checked_add(b) {
        Some(sum) => {
            info!(a, b, sum, "sum");
            status::OK
        }
        None => status::ERROR,
    }
}

fn sys_scale(value: f64, factor: f32) -> Status {
    info!(result = value * f64::from(factor), "scaled");
    status::OK
}

fn sys_fail(code: u8) -> Status {
    code
}

fn sys_panic() -> Status {
    panic!("requested by sys -panic");
}

/// Register the demo modules into `shell`
pub fn register(shell: &mut TinyShell) -> Result<(), ShellError> {
    shell.create_module("gpio", "simulated pin bank")?;
    shell.add("gpio", gpio_set, "set", "set pin to value")?;
    shell.add("gpio", gpio_get, "get", "log the value of a pin")?;
    shell.add("gpio", gpio_toggle, "toggle", "flip the low bit of a pin")?;

    shell.create_module("sys", "system utilities")?;
    shell.add("sys", sys_echo, "echo", "log the argument text")?;
    shell.add("sys", sys_add, "add", "log the sum of two integers")?;
    shell.add("sys", sys_scale, "scale", "log value multiplied by factor")?;
    shell.add("sys", sys_fail, "fail", "return the given status code")?;
    shell.add("sys", sys_panic, "panic", "panic inside the command")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_shell() -> TinyShell {
        let mut shell = TinyShell::new();
        register(&mut shell).unwrap();
        shell
    }

    #[test]
    fn test_demo_listing() {
        let shell = demo_shell();
        assert_eq!(shell.get_help(""), "gpio => simulated pin bank\nsys => system utilities\n");
        assert!(shell.get_help("gpio").contains("set (u8, u8) => set pin to value\n"));
    }

    #[test]
    fn test_gpio_set_then_toggle() {
        let shell = demo_shell();
        assert!(shell.execute("gpio -set 2, 1").is_ok());
        assert_eq!(PINS[2].load(Ordering::Relaxed), 1);
        assert!(shell.execute("gpio -toggle 2").is_ok());
        assert_eq!(PINS[2].load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_out_of_range_pin() {
        let shell = demo_shell();
        assert_eq!(
            shell.run_line_command("gpio -set 200, 1"),
            "error executing command 'set' in module 'gpio': 1"
        );
    }

    #[test]
    fn test_sys_commands() {
        let shell = demo_shell();
        assert!(shell.execute("sys -echo hello there").is_ok());
        assert!(shell.execute("sys -add -4, 9").is_ok());
        assert!(shell.execute("sys -scale 2.5, 4").is_ok());
        assert_eq!(shell.execute("sys -fail 3").unwrap_err().status(), 3);
        assert_eq!(shell.execute("sys -panic").unwrap_err().status(), status::EXECUTION_FAULT);
    }
}
