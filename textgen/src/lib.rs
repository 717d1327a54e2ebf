//! Generates a brainfuck program that prints a given text.
//!
//! Cell 0 is used as a loop counter and cell 1 holds the character being
//! printed. Each change of character is reached with a multiplication loop
//! over the cheapest factor pair of the difference.

use tracing::trace;

/// Returns a program printing the ASCII bytes of `text`; other bytes are dropped.
pub fn encode(text: &[u8]) -> String {
    let text = text
        .iter()
        .copied()
        .filter(u8::is_ascii)
        .collect::<Vec<_>>();
    let mut out = String::new();
    let mut previous = 0u8;
    let mut idx = 0;

    while let Some(&current) = text.get(idx) {
        let run = text[idx..].iter().take_while(|&&byte| byte == current).count();
        let diff = i32::from(current) - i32::from(previous);

        trace!(byte = %current.escape_ascii(), diff, run, "encoding");

        step(&mut out, diff);
        out.push_str(&".".repeat(run));
        out.push('<');

        previous = current;
        idx += run;
    }

    match out.rfind('.') {
        Some(last) => out.truncate(last + 1),
        None => out.clear(),
    }

    out.replace("<>", "")
}

/// Moves to the value cell and changes it by `diff`.
fn step(out: &mut String, diff: i32) {
    let symbol = if diff < 0 { '-' } else { '+' };
    let magnitude = diff.unsigned_abs();

    match magnitude {
        0 => out.push('>'),
        1 => {
            out.push('>');
            out.push(symbol);
        }
        _ => {
            let (mut times, mut by) = least_factors(magnitude);
            let prime = times == 1;
            if prime {
                (times, by) = least_factors(magnitude - 1);
            }

            out.push_str(&"+".repeat(times as usize));
            out.push_str("[>");
            out.extend(std::iter::repeat(symbol).take(by as usize));
            out.push_str("<-]>");

            if prime {
                out.push(symbol);
            }
        }
    }
}

/// Factor pair `(a, b)` of `n` with `a <= b` and the smallest `a + b`, `(1, n)` for primes.
fn least_factors(n: u32) -> (u32, u32) {
    let mut best = (1, n);

    for a in 2..=n / 2 {
        if n % a == 0 && a + n / a < best.0 + best.1 {
            best = (a, n / a);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use interpreter::Interpreter;
    use parser::Parser;
    use quickcheck::QuickCheck;

    use super::*;

    fn run(source: &str) -> Vec<u8> {
        let program = Parser::new(source.as_bytes())
            .parse()
            .expect("generated code must parse");
        let mut output = Vec::new();

        Interpreter::<8>::new(program)
            .run_with(&b""[..], &mut output)
            .expect("failed to interpret");

        output
    }

    #[test]
    fn factors() {
        assert_eq!(least_factors(72), (8, 9));
        assert_eq!(least_factors(33), (3, 11));
        assert_eq!(least_factors(36), (6, 6));
        assert_eq!(least_factors(13), (1, 13));
    }

    #[test]
    fn encodes_hi() {
        assert_eq!(
            encode(b"Hi"),
            "++++++++[>+++++++++<-]>.<+++[>+++++++++++<-]>."
        );
    }

    #[test]
    fn unit_steps_skip_the_loop() {
        assert_eq!(encode(b"ab"), "++++++++[>++++++++++++<-]>+.+.");
    }

    #[test]
    fn prime_differences_take_an_extra_step() {
        assert_eq!(encode(b"\x02"), "+[>+<-]>+.");
    }

    #[test]
    fn repeated_characters_print_together() {
        assert_eq!(run(&encode(b"zzz")), b"zzz");
        assert_eq!(encode(b"zzz").matches('.').count(), 3);
    }

    #[test]
    fn non_ascii_is_dropped() {
        assert_eq!(run(&encode("héllo".as_bytes())), b"hllo");
    }

    #[test]
    fn empty_text() {
        assert_eq!(encode(b""), "");
    }

    #[test]
    fn hello_world() {
        let text = b"Hello World!\n";

        assert_eq!(run(&encode(text)), text);
    }

    fn prints_its_text(text: String) -> bool {
        let expected = text.bytes().filter(u8::is_ascii).collect::<Vec<_>>();

        run(&encode(text.as_bytes())) == expected
    }

    #[test]
    fn any_text_round_trips() {
        QuickCheck::new().quickcheck(prints_its_text as fn(String) -> bool);
    }
}
