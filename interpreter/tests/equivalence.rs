//! Optimized execution must be observably identical to a plain interpreter
//! that rescans for brackets and folds nothing.

use interpreter::Interpreter;
use parser::{OptimizationOptions, Parser};
use quickcheck::{Arbitrary, Gen, QuickCheck};

const CELLS: usize = 256;

fn naive(source: &[u8], input: &[u8]) -> Vec<u8> {
    let code = source
        .iter()
        .copied()
        .filter(|byte| b"[]<>+-.,".contains(byte))
        .collect::<Vec<_>>();
    let mut tape = [0i8; CELLS];
    let mut pointer = 0usize;
    let mut input = input.iter();
    let mut output = Vec::new();
    let mut pc = 0;

    while pc < code.len() {
        match code[pc] {
            b'>' => pointer = (pointer + 1) % CELLS,
            b'<' => pointer = (pointer + CELLS - 1) % CELLS,
            b'+' => tape[pointer] = tape[pointer].wrapping_add(1),
            b'-' => tape[pointer] = tape[pointer].wrapping_sub(1),
            b'.' => output.push(tape[pointer] as u8),
            b',' => tape[pointer] = input.next().map_or(-1, |&byte| byte as i8),
            b'[' if tape[pointer] == 0 => {
                let mut depth = 0;
                loop {
                    match code[pc] {
                        b'[' => depth += 1,
                        b']' => depth -= 1,
                        _ => {}
                    }
                    if depth == 0 {
                        break;
                    }
                    pc += 1;
                }
            }
            b']' if tape[pointer] != 0 => {
                let mut depth = 0;
                loop {
                    match code[pc] {
                        b']' => depth += 1,
                        b'[' => depth -= 1,
                        _ => {}
                    }
                    if depth == 0 {
                        break;
                    }
                    pc -= 1;
                }
            }
            _ => {}
        }

        pc += 1;
    }

    output
}

fn optimized(source: &[u8], input: &[u8], options: OptimizationOptions) -> Vec<u8> {
    let program = Parser::new(source)
        .with_options(options)
        .parse()
        .expect("failed to parse");
    let mut output = Vec::new();

    Interpreter::<CELLS>::new(program)
        .run_with(input, &mut output)
        .expect("failed to interpret");

    output
}

/// A program that always terminates.
///
/// Loops never touch their own counter cell except for the single trailing
/// `-`, and never reach to the left of it, so every loop runs at most 255
/// times.
#[derive(Debug, Clone)]
struct Terminating {
    source: Vec<u8>,
    input: Vec<u8>,
}

fn body(g: &mut Gen, depth: usize, source: &mut Vec<u8>) {
    let mut offset = 0usize;
    let steps = usize::arbitrary(g) % 6;

    for _ in 0..steps {
        match u8::arbitrary(g) % 6 {
            0 => {
                offset += 1;
                source.push(b'>');
            }
            1 if offset > 0 => {
                offset -= 1;
                source.push(b'<');
            }
            2 if offset > 0 => source.push(*g.choose(b"+-").unwrap_or(&b'+')),
            3 if offset > 0 => source.push(b'.'),
            4 if offset > 0 && depth < 1 => {
                source.push(b'[');
                body(g, depth + 1, source);
                source.extend_from_slice(b"-]");
            }
            _ => {}
        }
    }

    source.extend(std::iter::repeat(b'<').take(offset));
}

impl Arbitrary for Terminating {
    fn arbitrary(g: &mut Gen) -> Self {
        const ATOMS: &[&[u8]] = &[
            b"+", b"+", b"-", b">", b"<", b".", b",", b"[-]", b"[->+<]", b"[<+>-]", b"<-",
        ];

        let mut source = Vec::new();
        let steps = usize::arbitrary(g) % (g.size() + 1);

        for _ in 0..steps {
            if bool::arbitrary(g) {
                source.extend_from_slice(g.choose(ATOMS).copied().unwrap_or(b"+"));
            } else {
                source.push(b'[');
                body(g, 0, &mut source);
                source.extend_from_slice(b"-]");
            }
        }

        let input = Vec::<u8>::arbitrary(g);

        Terminating { source, input }
    }
}

fn matches_naive(program: Terminating) -> bool {
    let expected = naive(&program.source, &program.input);

    optimized(&program.source, &program.input, OptimizationOptions::all()) == expected
        && optimized(&program.source, &program.input, OptimizationOptions::new()) == expected
}

#[test]
fn optimized_output_matches_naive() {
    QuickCheck::new()
        .tests(300)
        .quickcheck(matches_naive as fn(Terminating) -> bool);
}

#[test]
fn hello_world_matches_naive() {
    let source = include_bytes!("../../demos/hello.bf");

    assert_eq!(
        optimized(source, b"", OptimizationOptions::all()),
        naive(source, b"")
    );
    assert_eq!(naive(source, b""), b"Hello World!\n");
}

#[test]
fn run_length_matches_repeated_increments() {
    for count in [1usize, 2, 127, 128, 255, 256, 300] {
        let source = "+".repeat(count) + ".";

        assert_eq!(
            optimized(source.as_bytes(), b"", OptimizationOptions::all()),
            naive(source.as_bytes(), b""),
            "{count} increments"
        );
    }
}
