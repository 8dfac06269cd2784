pub use data::CombiningMarksData;
pub use data::CompositionData;
pub use marks::CombiningMarkSet;

use composition::MarkCombining;

mod composition;
pub mod data;
mod marks;

/// таблица композиций ANSEL: диакритический знак + базовый символ -> прекомпозиция
///
/// таблица воспроизводит историческое отображение как есть, включая расхождения
/// с каноническими композициями Unicode
pub struct CompositionTable<'a>
{
    /// записи знаков: знак, индекс и количество его пар
    marks: &'a [u64],
    /// записи пар: базовый символ и прекомпозиция
    pairs: &'a [u64],
}

impl<'a> CompositionTable<'a>
{
    /// таблица на запечённых данных
    pub fn new() -> Self
    {
        Self::from_baked(data::compositions())
    }

    /// заранее подготовленные данные
    pub fn from_baked(source: data::CompositionData<'a>) -> Self
    {
        Self {
            marks: source.marks,
            pairs: source.pairs,
        }
    }

    /// найти прекомпозицию для пары (знак, базовый символ)
    ///
    /// поиск точный, без сведения регистра или эквивалентных форм; у каждого знака -
    /// своя замкнутая таблица базовых символов, для незарегистрированной пары - None
    #[inline(never)]
    pub fn compose(&self, mark: u32, base: u32) -> Option<u32>
    {
        let combining = self.mark_combining(mark)?;

        composition::find_pair(combining.pairs(self.pairs), base)
    }

    /// информация о парах знака
    #[inline(always)]
    fn mark_combining(&self, mark: u32) -> Option<MarkCombining>
    {
        composition::find_mark(self.marks, mark)
    }
}
