use parser::{Instruction, Opcode, Program};

const INDENT: &str = "    ";

/// Text emitted for each instruction of a target language.
pub trait Backend {
    fn prelude(&self, cells: usize) -> String;
    fn epilogue(&self) -> &'static str;
    /// Indentation depth of top-level statements.
    fn base_depth(&self) -> usize;
    /// Statement lines for one instruction, `\n`-separated.
    fn statement(&self, instruction: Instruction) -> String;

    /// Placeholder for a loop with no statements, where the language needs one.
    fn empty_body(&self) -> Option<&'static str> {
        None
    }
}

/// Run length or amount reduced to the byte range.
fn amount(instruction: Instruction) -> isize {
    instruction.offset.rem_euclid(256)
}

#[derive(Debug, Clone)]
pub struct Transpiler<const N: usize> {
    program: Program,
}

impl<const N: usize> Transpiler<N> {
    pub fn new(program: Program) -> Self {
        Self { program }
    }

    pub fn transpile(&self, backend: &dyn Backend) -> String {
        let mut out = backend.prelude(N);
        let mut depth = backend.base_depth();
        let mut previous = None;

        for (_, instruction) in self.program.iter() {
            if instruction.opcode == Opcode::JumpIfNotZero {
                if previous == Some(Opcode::JumpIfZero) {
                    if let Some(placeholder) = backend.empty_body() {
                        push_line(&mut out, depth, placeholder);
                    }
                }

                depth = depth.saturating_sub(1);
            }

            for line in backend.statement(instruction).lines() {
                push_line(&mut out, depth, line);
            }

            if instruction.opcode == Opcode::JumpIfZero {
                depth += 1;
            }

            previous = Some(instruction.opcode);
        }

        out.push_str(backend.epilogue());
        out
    }
}

fn push_line(out: &mut String, depth: usize, line: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }

    out.push_str(line);
    out.push('\n');
}

#[derive(Debug, Clone, Copy)]
pub struct C;

impl Backend for C {
    fn prelude(&self, cells: usize) -> String {
        format!(
            "#include <stdio.h>\n\nint main(void) {{\n    static unsigned char t[{cells}];\n    size_t p = 0;\n\n"
        )
    }

    fn epilogue(&self) -> &'static str {
        "    return 0;\n}\n"
    }

    fn base_depth(&self) -> usize {
        1
    }

    fn statement(&self, instruction: Instruction) -> String {
        use Opcode::*;

        let n = amount(instruction);

        match instruction.opcode {
            MoveRight => format!("p += {};", instruction.offset),
            MoveLeft => format!("p -= {};", instruction.offset),
            Increment => format!("t[p] += {n};"),
            Decrement => format!("t[p] -= {n};"),
            JumpIfZero => "while (t[p]) {".into(),
            JumpIfNotZero => "}".into(),
            Out => "putchar(t[p]);".into(),
            In => "fflush(stdout);\nt[p] = getchar();".into(),
            Clear => "t[p] = 0;".into(),
            TransferRight => "t[p + 1] += t[p];\nt[p] = 0;".into(),
            TransferLeft => "t[p - 1] += t[p];\nt[p] = 0;".into(),
            DecrementLeft => "p -= 1;\nt[p] -= 1;".into(),
            Dead | Halt => String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rust;

impl Backend for Rust {
    fn prelude(&self, cells: usize) -> String {
        format!(
            "#![allow(unused)]\n\nuse std::io::{{Read, Write}};\n\nfn main() {{\n    let mut t = [0u8; {cells}];\n    let mut p: usize = 0;\n    let mut byte = [0u8; 1];\n    let mut stdin = std::io::stdin().lock();\n    let mut stdout = std::io::stdout().lock();\n\n"
        )
    }

    fn epilogue(&self) -> &'static str {
        "    stdout.flush().unwrap();\n}\n"
    }

    fn base_depth(&self) -> usize {
        1
    }

    fn statement(&self, instruction: Instruction) -> String {
        use Opcode::*;

        let n = amount(instruction);

        match instruction.opcode {
            MoveRight => format!("p += {};", instruction.offset),
            MoveLeft => format!("p -= {};", instruction.offset),
            Increment => format!("t[p] = t[p].wrapping_add({n});"),
            Decrement => format!("t[p] = t[p].wrapping_sub({n});"),
            JumpIfZero => "while t[p] != 0 {".into(),
            JumpIfNotZero => "}".into(),
            Out => "stdout.write_all(&t[p..p + 1]).unwrap();".into(),
            In => "stdout.flush().unwrap();\nt[p] = match stdin.read(&mut byte) {\n    Ok(1) => byte[0],\n    _ => 255,\n};".into(),
            Clear => "t[p] = 0;".into(),
            TransferRight => "t[p + 1] = t[p + 1].wrapping_add(t[p]);\nt[p] = 0;".into(),
            TransferLeft => "t[p - 1] = t[p - 1].wrapping_add(t[p]);\nt[p] = 0;".into(),
            DecrementLeft => "p -= 1;\nt[p] = t[p].wrapping_sub(1);".into(),
            Dead | Halt => String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Python;

impl Backend for Python {
    fn prelude(&self, cells: usize) -> String {
        format!("import sys\n\nt = [0] * {cells}\np = 0\n\n")
    }

    fn epilogue(&self) -> &'static str {
        "sys.stdout.buffer.flush()\n"
    }

    fn base_depth(&self) -> usize {
        0
    }

    fn statement(&self, instruction: Instruction) -> String {
        use Opcode::*;

        let n = amount(instruction);

        match instruction.opcode {
            MoveRight => format!("p += {}", instruction.offset),
            MoveLeft => format!("p -= {}", instruction.offset),
            Increment => format!("t[p] = (t[p] + {n}) % 256"),
            Decrement => format!("t[p] = (t[p] - {n}) % 256"),
            JumpIfZero => "while t[p]:".into(),
            JumpIfNotZero => String::new(),
            Out => "sys.stdout.buffer.write(bytes((t[p],)))".into(),
            In => "sys.stdout.buffer.flush()\nc = sys.stdin.buffer.read(1)\nt[p] = c[0] if c else 255".into(),
            Clear => "t[p] = 0".into(),
            TransferRight => "t[p + 1] = (t[p + 1] + t[p]) % 256\nt[p] = 0".into(),
            TransferLeft => "t[p - 1] = (t[p - 1] + t[p]) % 256\nt[p] = 0".into(),
            DecrementLeft => "p -= 1\nt[p] = (t[p] - 1) % 256".into(),
            Dead | Halt => String::new(),
        }
    }

    fn empty_body(&self) -> Option<&'static str> {
        Some("pass")
    }
}

/// Java class whose name is derived from the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Java {
    class: String,
}

impl Java {
    /// Title-cases the words of `stem` into a class name, `Main` when nothing usable is left.
    pub fn from_stem(stem: &str) -> Self {
        let mut class = stem
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|word| !word.is_empty())
            .map(|word| {
                let (head, tail) = word.split_at(1);
                head.to_ascii_uppercase() + &tail.to_ascii_lowercase()
            })
            .collect::<String>();

        if class.is_empty() {
            class.push_str("Main");
        } else if class.starts_with(|c: char| c.is_ascii_digit()) {
            class.insert(0, '_');
        }

        Self { class }
    }

    pub fn class(&self) -> &str {
        &self.class
    }
}

impl Backend for Java {
    fn prelude(&self, cells: usize) -> String {
        format!(
            "import java.io.IOException;\n\npublic class {} {{\n    public static void main(String[] args) throws IOException {{\n        int[] t = new int[{cells}];\n        int p = 0;\n\n",
            self.class
        )
    }

    fn epilogue(&self) -> &'static str {
        "        System.out.flush();\n    }\n}\n"
    }

    fn base_depth(&self) -> usize {
        2
    }

    fn statement(&self, instruction: Instruction) -> String {
        use Opcode::*;

        let n = amount(instruction);

        match instruction.opcode {
            MoveRight => format!("p += {};", instruction.offset),
            MoveLeft => format!("p -= {};", instruction.offset),
            Increment => format!("t[p] = (t[p] + {n}) & 255;"),
            Decrement => format!("t[p] = (t[p] - {n}) & 255;"),
            JumpIfZero => "while (t[p] != 0) {".into(),
            JumpIfNotZero => "}".into(),
            Out => "System.out.write(t[p]);".into(),
            In => "System.out.flush();\nt[p] = System.in.read() & 255;".into(),
            Clear => "t[p] = 0;".into(),
            TransferRight => "t[p + 1] = (t[p + 1] + t[p]) & 255;\nt[p] = 0;".into(),
            TransferLeft => "t[p - 1] = (t[p - 1] + t[p]) & 255;\nt[p] = 0;".into(),
            DecrementLeft => "p -= 1;\nt[p] = (t[p] - 1) & 255;".into(),
            Dead | Halt => String::new(),
        }
    }
}
