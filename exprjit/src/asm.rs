//! Machine-code emission for x86-64.
//!
//! The generated routine is a stack machine: every primitive leaves its result
//! in a fresh slot on the native stack, and binary operators pop two slots and
//! push one. The buffer only grows; jumps either target code that is already
//! emitted or skip a fixed number of bytes inside one primitive.
//!
//! Layout:
//!
//! ```text
//! 0      fault stub   mov rax,[rbp-8]; mov qword [rax],1; xor eax,eax; leave; ret
//! ENTRY  prologue     push rbp; mov rbp,rsp; push rcx
//!        body         one primitive per reduction
//!        epilogue     pop rax; leave; ret
//! ```
//!
//! The routine follows the System V calling convention with the signature
//! `fn(x: i64, y: i64, z: i64, fault: *mut i64) -> i64`. The prologue saves
//! `fault` (`rcx`) at `[rbp-8]`; a zero divisor jumps to the stub, which
//! stores 1 there and returns 0.
use crate::{MachineCode, Operator, Param};

/// Records a division by zero and returns 0.
pub const FAULT_STUB: [u8; 15] = [
    0x48, 0x8b, 0x45, 0xf8, // mov rax, [rbp-8]
    0x48, 0xc7, 0x00, 0x01, 0x00, 0x00, 0x00, // mov qword [rax], 1
    0x31, 0xc0, // xor eax, eax
    0xc9, // leave
    0xc3, // ret
];

pub const PROLOGUE: [u8; 5] = [
    0x55, // push rbp
    0x48, 0x89, 0xe5, // mov rbp, rsp
    0x51, // push rcx
];

pub const EPILOGUE: [u8; 3] = [
    0x58, // pop rax
    0xc9, // leave
    0xc3, // ret
];

/// Offset of the first prologue byte.
pub const ENTRY: usize = FAULT_STUB.len();

/// Bytes every routine carries regardless of its body.
pub const OVERHEAD: usize = FAULT_STUB.len() + PROLOGUE.len() + EPILOGUE.len();

pub const LOAD_SIZE: usize = 11;
pub const PARAM_SIZE: usize = 1;
pub const NEGATE_SIZE: usize = 4;

const ADD: [u8; 5] = [
    0x58, // pop rax
    0x48, 0x01, 0x04, 0x24, // add [rsp], rax
];

const SUB: [u8; 5] = [
    0x58, // pop rax
    0x48, 0x29, 0x04, 0x24, // sub [rsp], rax
];

const MUL: [u8; 10] = [
    0x58, // pop rax
    0x48, 0x0f, 0xaf, 0x04, 0x24, // imul rax, [rsp]
    0x48, 0x89, 0x04, 0x24, // mov [rsp], rax
];

const DIV_HEAD: [u8; 5] = [
    0x59, // pop rcx
    0x58, // pop rax
    0x48, 0x85, 0xc9, // test rcx, rcx
];

const JZ: [u8; 2] = [0x0f, 0x84];

const DIV_TAIL: [u8; 19] = [
    0x48, 0x83, 0xf9, 0xff, // cmp rcx, -1
    0x75, 0x05, // jne .divide
    0x48, 0xf7, 0xd8, // neg rax
    0xeb, 0x07, // jmp .done
    0x52, // .divide: push rdx
    0x48, 0x99, // cqo
    0x48, 0xf7, 0xf9, // idiv rcx
    0x5a, // pop rdx
    0x50, // .done: push rax
];

/// Encoded length of a binary operator.
pub const fn binary_size(op: Operator) -> usize {
    match op {
        Operator::Add => ADD.len(),
        Operator::Sub => SUB.len(),
        Operator::Mul => MUL.len(),
        Operator::Div => DIV_HEAD.len() + JZ.len() + 4 + DIV_TAIL.len(),
    }
}

/// Append-only instruction buffer for one routine.
#[derive(Debug, Clone)]
pub struct Assembler {
    code: Vec<u8>,
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new()
    }
}

impl Assembler {
    /// Starts a routine: fault stub, then the prologue at [`ENTRY`].
    pub fn new() -> Self {
        let mut code = Vec::with_capacity(64);
        code.extend_from_slice(&FAULT_STUB);
        code.extend_from_slice(&PROLOGUE);
        Self { code }
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// `mov rax, imm64; push rax`
    pub fn load_immediate(&mut self, value: i64) {
        self.code.extend_from_slice(&[0x48, 0xb8]);
        self.code.extend_from_slice(&value.to_le_bytes());
        self.code.push(0x50);
    }

    /// Pushes the argument register holding `param`.
    pub fn push_param(&mut self, param: Param) {
        self.code.push(match param {
            Param::X => 0x57, // push rdi
            Param::Y => 0x56, // push rsi
            Param::Z => 0x52, // push rdx
        });
    }

    /// Replaces the two top slots `a, b` with `a op b`.
    ///
    /// Division truncates toward zero, maps `i64::MIN / -1` to `i64::MIN` and
    /// leaves `rdx` (the `z` argument) intact.
    pub fn binary(&mut self, op: Operator) {
        match op {
            Operator::Add => self.code.extend_from_slice(&ADD),
            Operator::Sub => self.code.extend_from_slice(&SUB),
            Operator::Mul => self.code.extend_from_slice(&MUL),
            Operator::Div => {
                self.code.extend_from_slice(&DIV_HEAD);
                let next = self.code.len() + JZ.len() + 4;
                // rel32 from the end of the jz back to offset 0
                let rel = -(next as i64) as i32;
                self.code.extend_from_slice(&JZ);
                self.code.extend_from_slice(&rel.to_le_bytes());
                self.code.extend_from_slice(&DIV_TAIL);
            }
        }
    }

    /// `neg qword [rsp]`
    pub fn negate(&mut self) {
        self.code.extend_from_slice(&[0x48, 0xf7, 0x1c, 0x24]);
    }

    /// Appends the epilogue and hands over the finished routine.
    pub fn finish(mut self) -> MachineCode {
        self.code.extend_from_slice(&EPILOGUE);
        log::debug!("assembled {} bytes, entry at {}", self.code.len(), ENTRY);
        MachineCode::new(self.code, ENTRY)
    }
}
