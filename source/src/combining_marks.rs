lazy_static! {
    /// непробельные диакритические знаки ANSEL
    pub static ref COMBINING_MARKS: Vec<u32> = combining_marks();
}

const DATA: &str = include_str!("./../data/ansel/combining_marks.txt");

/// разбор combining_marks.txt - список непробельных диакритических знаков ANSEL
/// набор зафиксирован стандартом и не совпадает с множеством знаков таблицы композиций:
/// часть знаков (кандрабинду, запятые, половинки лигатур и двойных тильд) не комбинируется ни с чем
pub fn combining_marks() -> Vec<u32>
{
    let mut marks = vec![];

    for line in DATA.lines() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (code, _) = line.split_once('#').unwrap();
        let code = u32::from_str_radix(code.trim(), 16).unwrap();

        marks.push(code);
    }

    marks
}

/// является ли кодпоинт диакритическим знаком ANSEL?
pub fn is_combining_mark(code: u32) -> bool
{
    COMBINING_MARKS.contains(&code)
}
