use clap::ValueEnum;
use std::fmt::Display;

const CPF_LEN: usize = 11;
const CNPJ_LEN: usize = 14;

const CPF_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Kind of Brazilian taxpayer number, told apart by digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum NationalId {
    /// Cadastro de Pessoas Físicas, 11 digits.
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica, 14 digits.
    Cnpj,
}

impl NationalId {
    /// Detects the kind from the number of digits, ignoring punctuation.
    pub fn detect(id: &str) -> Option<Self> {
        match digits(id).len() {
            CPF_LEN => Some(NationalId::Cpf),
            CNPJ_LEN => Some(NationalId::Cnpj),
            _ => None,
        }
    }

    pub fn validate(&self, id: &str) -> bool {
        match self {
            NationalId::Cpf => validate_cpf(id),
            NationalId::Cnpj => validate_cnpj(id),
        }
    }

    /// Renders the digits of `id` with the usual punctuation mask, e.g.
    /// `529.982.247-25` or `11.222.333/0001-81`.
    pub fn mask(&self, id: &str) -> Option<String> {
        let digits: String = digits(id).iter().map(|d| d.to_string()).collect();

        match self {
            NationalId::Cpf if digits.len() == CPF_LEN => Some(format!(
                "{}.{}.{}-{}",
                &digits[..3],
                &digits[3..6],
                &digits[6..9],
                &digits[9..]
            )),
            NationalId::Cnpj if digits.len() == CNPJ_LEN => Some(format!(
                "{}.{}.{}/{}-{}",
                &digits[..2],
                &digits[2..5],
                &digits[5..8],
                &digits[8..12],
                &digits[12..]
            )),
            _ => None,
        }
    }
}

impl Display for NationalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NationalId::Cpf => write!(f, "CPF"),
            NationalId::Cnpj => write!(f, "CNPJ"),
        }
    }
}

fn digits(id: &str) -> Vec<u32> {
    id.chars().filter_map(|c| c.to_digit(10)).collect()
}

// mod-11 check digit over the leading digits, using the tail of `weights`
fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let weights = &weights[weights.len() - digits.len()..];
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();

    match sum % 11 {
        remainder if remainder < 2 => 0,
        remainder => 11 - remainder,
    }
}

fn validate_checksum(id: &str, len: usize, weights: &[u32]) -> bool {
    let digits = digits(id);

    if digits.len() != len {
        return false;
    }
    if digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    let first = check_digit(&digits[..len - 2], weights);
    let second = check_digit(&digits[..len - 1], weights);
    let valid = first == digits[len - 2] && second == digits[len - 1];

    tracing::trace!(len, valid, "checked national id digits");
    valid
}

/// Validates a CPF, with or without its `000.000.000-00` punctuation.
pub fn validate_cpf(cpf: &str) -> bool {
    validate_checksum(cpf, CPF_LEN, &CPF_WEIGHTS)
}

/// Validates a CNPJ, with or without its `00.000.000/0000-00` punctuation.
pub fn validate_cnpj(cnpj: &str) -> bool {
    validate_checksum(cnpj, CNPJ_LEN, &CNPJ_WEIGHTS)
}
