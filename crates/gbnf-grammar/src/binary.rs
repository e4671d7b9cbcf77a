//! Binary container for compiled grammars.
//!
//! Layout: 32-byte [`Header`], then the rule section (per rule: element
//! count, then `(kind, value)` pairs as little-endian u32), then the
//! symbol-name offset table (`symbol_count + 1` entries, last is the blob
//! size) and the concatenated UTF-8 name blob. The header checksum is a
//! CRC32 of everything after the header.
//!
//! Element kind codes on the wire are the frozen [`ElementKind`] codes; the
//! in-memory rule arrays and this container encode the same
//! `End`-terminated (kind, value) sequences the sampling engine consumes.

use crate::element::{ElementKind, GrammarElement, RuleId};
use crate::grammar::Grammar;
use crate::symbols::SymbolTable;

/// Magic bytes: b"GBNF".
pub const MAGIC: [u8; 4] = *b"GBNF";

/// Container format version (currently 1).
pub const VERSION: u32 = 1;

/// Size of the encoded header in bytes.
pub const HEADER_SIZE: usize = 32;

/// Errors from decoding or validating a compiled grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModuleError {
    #[error("file too small: {0} bytes")]
    FileTooSmall(usize),

    #[error("invalid magic: expected GBNF")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u32),

    #[error("checksum mismatch: header says {header:#010x}, body is {computed:#010x}")]
    ChecksumMismatch { header: u32, computed: u32 },

    #[error("truncated {0} section")]
    Truncated(&'static str),

    #[error("unknown element kind code {0}")]
    UnknownElementKind(u32),

    #[error("{0} trailing bytes after name blob")]
    TrailingBytes(usize),

    #[error("name table offsets are not monotonic")]
    BadNameOffsets,

    #[error("rule name is not valid UTF-8")]
    BadName,

    #[error("symbol and rule tables do not line up: {symbols} symbols, {rules} rules")]
    TableMismatch { symbols: usize, rules: usize },

    #[error("malformed rule {rule}: {detail}")]
    MalformedRule { rule: RuleId, detail: &'static str },
}

/// File header - first 32 bytes of a compiled grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(C)]
pub struct Header {
    /// Magic bytes: b"GBNF"
    pub magic: [u8; 4],
    /// Format version (currently 1)
    pub version: u32,
    /// CRC32 checksum of everything after the header
    pub checksum: u32,
    /// Number of rule slots
    pub rule_count: u32,
    /// Number of symbol names (equals `rule_count` in a well-formed file)
    pub symbol_count: u32,
    /// Size of the name blob in bytes
    pub name_blob_size: u32,
    /// Reserved
    pub _reserved: [u8; 8],
}

const _: () = assert!(std::mem::size_of::<Header>() == HEADER_SIZE);

impl Default for Header {
    fn default() -> Self {
        Self {
            magic: MAGIC,
            version: VERSION,
            checksum: 0,
            rule_count: 0,
            symbol_count: 0,
            name_blob_size: 0,
            _reserved: [0; 8],
        }
    }
}

impl Header {
    /// Decode a header from the first 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        assert!(bytes.len() >= HEADER_SIZE, "header too short");

        let mut reserved = [0u8; 8];
        reserved.copy_from_slice(&bytes[24..32]);

        Self {
            magic: [bytes[0], bytes[1], bytes[2], bytes[3]],
            version: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
            checksum: u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]),
            rule_count: u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]),
            symbol_count: u32::from_le_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]),
            name_blob_size: u32::from_le_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]),
            _reserved: reserved,
        }
    }

    /// Encode the header to 32 bytes.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(&self.magic);
        bytes[4..8].copy_from_slice(&self.version.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.checksum.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.rule_count.to_le_bytes());
        bytes[16..20].copy_from_slice(&self.symbol_count.to_le_bytes());
        bytes[20..24].copy_from_slice(&self.name_blob_size.to_le_bytes());
        bytes[24..32].copy_from_slice(&self._reserved);
        bytes
    }

    pub fn validate_magic(&self) -> bool {
        self.magic == MAGIC
    }

    pub fn validate_version(&self) -> bool {
        self.version == VERSION
    }
}

impl Grammar {
    /// Encode to the binary container format.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut body = Vec::new();

        for rule in self.rules() {
            push_u32(&mut body, rule.len() as u32);
            for elem in rule {
                push_u32(&mut body, elem.kind.code() as u32);
                push_u32(&mut body, elem.value);
            }
        }

        let (blob, offsets) = self.symbols().to_blob();
        for off in &offsets {
            push_u32(&mut body, *off);
        }
        body.extend_from_slice(&blob);

        let header = Header {
            checksum: crc32fast::hash(&body),
            rule_count: self.rules().len() as u32,
            symbol_count: self.symbols().len() as u32,
            name_blob_size: blob.len() as u32,
            ..Header::default()
        };

        let mut bytes = Vec::with_capacity(HEADER_SIZE + body.len());
        bytes.extend_from_slice(&header.to_bytes());
        bytes.extend_from_slice(&body);
        bytes
    }

    /// Decode from the binary container format and validate the result.
    pub fn from_bytes(bytes: &[u8]) -> Result<Grammar, ModuleError> {
        if bytes.len() < HEADER_SIZE {
            return Err(ModuleError::FileTooSmall(bytes.len()));
        }

        let header = Header::from_bytes(bytes);
        if !header.validate_magic() {
            return Err(ModuleError::InvalidMagic);
        }
        if !header.validate_version() {
            return Err(ModuleError::UnsupportedVersion(header.version));
        }

        let body = &bytes[HEADER_SIZE..];
        let computed = crc32fast::hash(body);
        if computed != header.checksum {
            return Err(ModuleError::ChecksumMismatch {
                header: header.checksum,
                computed,
            });
        }

        // Counts come from the wire; don't pre-reserve from them.
        let mut reader = Reader { bytes: body, pos: 0 };
        let mut rules = Vec::new();
        for _ in 0..header.rule_count {
            let count = reader.read_u32("rules")?;
            let mut rule = Vec::new();
            for _ in 0..count {
                let code = reader.read_u32("rules")?;
                let kind = u8::try_from(code)
                    .ok()
                    .and_then(ElementKind::from_code)
                    .ok_or(ModuleError::UnknownElementKind(code))?;
                let value = reader.read_u32("rules")?;
                rule.push(GrammarElement { kind, value });
            }
            rules.push(rule);
        }

        let mut offsets = Vec::new();
        for _ in 0..header.symbol_count as usize + 1 {
            offsets.push(reader.read_u32("name table")?);
        }
        let blob = reader.take(header.name_blob_size as usize, "name blob")?;
        if reader.pos != body.len() {
            return Err(ModuleError::TrailingBytes(body.len() - reader.pos));
        }

        if offsets.last() != Some(&header.name_blob_size) {
            return Err(ModuleError::BadNameOffsets);
        }
        let mut names = Vec::new();
        for pair in offsets.windows(2) {
            let (start, end) = (pair[0] as usize, pair[1] as usize);
            if start > end || end > blob.len() {
                return Err(ModuleError::BadNameOffsets);
            }
            let name = std::str::from_utf8(&blob[start..end])
                .map_err(|_| ModuleError::BadName)?;
            names.push(name.to_owned());
        }

        let grammar = Grammar::from_parts(SymbolTable::from_names(names), rules);
        grammar.validate()?;
        Ok(grammar)
    }
}

#[inline]
fn push_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Bounds-checked little-endian reader over the body section.
struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn read_u32(&mut self, section: &'static str) -> Result<u32, ModuleError> {
        if self.pos + 4 > self.bytes.len() {
            return Err(ModuleError::Truncated(section));
        }
        let b = &self.bytes[self.pos..];
        self.pos += 4;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn take(&mut self, len: usize, section: &'static str) -> Result<&'a [u8], ModuleError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.bytes.len())
            .ok_or(ModuleError::Truncated(section))?;
        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }
}
