use std::collections::HashMap;

lazy_static! {
    /// пары композиции: диакритический знак -> базовый символ -> прекомпозиция
    pub static ref COMPOSITION_PAIRS: HashMap<u32, HashMap<u32, u32>> = pairs();
}

const DATA: &str = include_str!("./../data/ansel/composition_pairs.txt");

/// запись таблицы пар
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositionPair
{
    /// диакритический знак
    pub mark: u32,
    /// базовый символ
    pub base: u32,
    /// прекомпозиция
    pub composed: u32,
}

/// ошибка разбора исходных данных
#[derive(Debug, PartialEq)]
pub enum SourceError
{
    BadLine,
}

impl From<core::num::ParseIntError> for SourceError
{
    fn from(_: core::num::ParseIntError) -> Self
    {
        Self::BadLine
    }
}

impl TryFrom<&str> for CompositionPair
{
    type Error = SourceError;

    fn try_from(line: &str) -> Result<Self, Self::Error>
    {
        let fields: Vec<&str> = line.split(';').collect();

        if fields.len() != 3 {
            return Err(SourceError::BadLine);
        }

        Ok(Self {
            mark: u32::from_str_radix(fields[0].trim(), 16)?,
            base: u32::from_str_radix(fields[1].trim(), 16)?,
            composed: u32::from_str_radix(fields[2].trim(), 16)?,
        })
    }
}

/// разбор composition_pairs.txt и составление хешмапа пар
/// каждый знак имеет свою замкнутую таблицу базовых символов; базовым символом может быть
/// и ранее скомбинированный кодпоинт - так получаются дважды отмеченные буквы (вьетнамский)
fn pairs() -> HashMap<u32, HashMap<u32, u32>>
{
    let mut map: HashMap<u32, HashMap<u32, u32>> = HashMap::new();

    for line in DATA.lines() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let pair = CompositionPair::try_from(line).unwrap();

        // ноль зарезервирован под "нет композиции"
        assert_ne!(pair.composed, 0);

        let previous = map
            .entry(pair.mark)
            .or_insert(HashMap::new())
            .insert(pair.base, pair.composed);

        // дубликат ключа (знак, базовый) - дефект исходных данных
        assert!(
            previous.is_none(),
            "дубликат пары {:04X};{:04X}",
            pair.mark,
            pair.base
        );
    }

    map
}

/// найти прекомпозицию для пары (знак, базовый символ)
pub fn compose(mark: u32, base: u32) -> Option<u32>
{
    COMPOSITION_PAIRS.get(&mark)?.get(&base).copied()
}
