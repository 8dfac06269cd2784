use ansel_composing::CombiningMarkSet;
use ansel_composing_source::is_combining_mark;

/// выборочные знаки классификатора
#[test]
fn test_fixtures()
{
    let marks = CombiningMarkSet::new();

    assert!(marks.contains(0x0301));
    assert!(marks.contains(0x00B7));
    assert!(marks.contains(0x02BE));
    assert!(marks.contains(0x0336));
    assert!(marks.contains(0xFE20));
    assert!(marks.contains(0xFE23));

    assert!(!marks.contains(0x0041));
    assert!(!marks.contains(0x0305));
    assert!(!marks.contains(0x00B6));
    assert!(!marks.contains(0xFE24));

    // тильда и черта снизу есть в таблице композиций, но знаками классификатора не являются
    assert!(!marks.contains(0x0330));
    assert!(!marks.contains(0x0331));
}

/// классификатор совпадает с исходным списком на всём диапазоне кодпоинтов
/// и в полосе за его пределами
#[test]
fn test_full_range()
{
    let marks = CombiningMarkSet::new();

    for code in 0 ..= 0x110000 + 0x100 {
        assert_eq!(marks.contains(code), is_combining_mark(code), "{:04X}", code);
    }
}

/// суррогаты, граница диапазона Unicode, максимум u32 - просто false
#[test]
fn test_out_of_domain()
{
    let marks = CombiningMarkSet::new();

    assert!(!marks.contains(0));
    assert!(!marks.contains(0xD800));
    assert!(!marks.contains(0xDFFF));
    assert!(!marks.contains(0x10FFFF));
    assert!(!marks.contains(0x110000));
    assert!(!marks.contains(u32::MAX));
}
