//! The fixed catalog of the 99 Names.
//!
//! Ordinal position is stable and determines an entry's tier.

use crate::types::{CatalogFilter, NamedItem, Tier, CATALOG_SIZE};

const fn item(
    index: usize,
    canonical_text: &'static str,
    simple_text: &'static str,
    transliteration: &'static str,
    meaning: &'static str,
) -> NamedItem {
    NamedItem {
        index,
        canonical_text,
        simple_text,
        transliteration,
        meaning,
    }
}

static NAMES: [NamedItem; CATALOG_SIZE] = [
    item(0, "الرَّحْمَٰنُ", "الرحمن", "Ar-Rahman", "The Most Merciful"),
    item(1, "الرَّحِيمُ", "الرحيم", "Ar-Raheem", "The Most Compassionate"),
    item(2, "الْمَلِكُ", "الملك", "Al-Malik", "The King"),
    item(3, "الْقُدُّوسُ", "القدوس", "Al-Quddus", "The Most Holy"),
    item(4, "السَّلَامُ", "السلام", "As-Salaam", "The Source of Peace"),
    item(5, "الْمُؤْمِنُ", "المؤمن", "Al-Mu'min", "The Guardian of Faith"),
    item(6, "الْمُهَيْمِنُ", "المهيمن", "Al-Muhaymin", "The Guardian"),
    item(7, "الْعَزِيزُ", "العزيز", "Al-Aziz", "The Mighty"),
    item(8, "الْجَبَّارُ", "الجبار", "Al-Jabbar", "The Compeller"),
    item(9, "الْمُتَكَبِّرُ", "المتكبر", "Al-Mutakabbir", "The Supreme"),
    item(10, "الْخَالِقُ", "الخالق", "Al-Khaliq", "The Creator"),
    item(11, "الْبَارِئُ", "البارئ", "Al-Bari'", "The Originator"),
    item(12, "الْمُصَوِّرُ", "المصور", "Al-Musawwir", "The Fashioner"),
    item(13, "الْغَفَّارُ", "الغفار", "Al-Ghaffar", "The Repeatedly Forgiving"),
    item(14, "الْقَهَّارُ", "القهار", "Al-Qahhar", "The Subduer"),
    item(15, "الْوَهَّابُ", "الوهاب", "Al-Wahhab", "The Bestower"),
    item(16, "الرَّزَّاقُ", "الرزاق", "Ar-Razzaq", "The Provider"),
    item(17, "الْفَتَّاحُ", "الفتاح", "Al-Fattah", "The Opener"),
    item(18, "الْعَلِيمُ", "العليم", "Al-Aleem", "The All-Knowing"),
    item(19, "الْقَابِضُ", "القابض", "Al-Qabid", "The Constrictor"),
    item(20, "الْبَاسِطُ", "الباسط", "Al-Basit", "The Expander"),
    item(21, "الْخَافِضُ", "الخافض", "Al-Khafid", "The Abaser"),
    item(22, "الرَّافِعُ", "الرافع", "Ar-Rafi'", "The Exalter"),
    item(23, "الْمُعِزُّ", "المعز", "Al-Mu'izz", "The Honorer"),
    item(24, "الْمُذِلُّ", "المذل", "Al-Mudhill", "The Humiliator"),
    item(25, "السَّمِيعُ", "السميع", "As-Samee'", "The All-Hearing"),
    item(26, "الْبَصِيرُ", "البصير", "Al-Baseer", "The All-Seeing"),
    item(27, "الْحَكَمُ", "الحكم", "Al-Hakam", "The Judge"),
    item(28, "الْعَدْلُ", "العدل", "Al-Adl", "The Just"),
    item(29, "اللَّطِيفُ", "اللطيف", "Al-Lateef", "The Gentle"),
    item(30, "الْخَبِيرُ", "الخبير", "Al-Khabeer", "The Aware"),
    item(31, "الْحَلِيمُ", "الحليم", "Al-Haleem", "The Forbearing"),
    item(32, "الْعَظِيمُ", "العظيم", "Al-Azeem", "The Magnificent"),
    item(33, "الْغَفُورُ", "الغفور", "Al-Ghafoor", "The Forgiving"),
    item(34, "الشَّكُورُ", "الشكور", "Ash-Shakoor", "The Appreciative"),
    item(35, "الْعَلِيُّ", "العلي", "Al-Ali", "The Most High"),
    item(36, "الْكَبِيرُ", "الكبير", "Al-Kabeer", "The Greatest"),
    item(37, "الْحَفِيظُ", "الحفيظ", "Al-Hafeedh", "The Preserver"),
    item(38, "الْمُقِيتُ", "المقيت", "Al-Muqeet", "The Nourisher"),
    item(39, "الْحَسِيبُ", "الحسيب", "Al-Haseeb", "The Reckoner"),
    item(40, "الْجَلِيلُ", "الجليل", "Al-Jaleel", "The Majestic"),
    item(41, "الْكَرِيمُ", "الكريم", "Al-Kareem", "The Generous"),
    item(42, "الرَّقِيبُ", "الرقيب", "Ar-Raqeeb", "The Watchful"),
    item(43, "الْمُجِيبُ", "المجيب", "Al-Mujeeb", "The Responsive"),
    item(44, "الْوَاسِعُ", "الواسع", "Al-Wasi'", "The All-Encompassing"),
    item(45, "الْحَكِيمُ", "الحكيم", "Al-Hakeem", "The Wise"),
    item(46, "الْوَدُودُ", "الودود", "Al-Wadood", "The Loving"),
    item(47, "الْمَجِيدُ", "المجيد", "Al-Majeed", "The Glorious"),
    item(48, "الْبَاعِثُ", "الباعث", "Al-Ba'ith", "The Resurrector"),
    item(49, "الشَّهِيدُ", "الشهيد", "Ash-Shaheed", "The Witness"),
    item(50, "الْحَقُّ", "الحق", "Al-Haqq", "The Truth"),
    item(51, "الْوَكِيلُ", "الوكيل", "Al-Wakeel", "The Trustee"),
    item(52, "الْقَوِيُّ", "القوي", "Al-Qawiyy", "The Strong"),
    item(53, "الْمَتِينُ", "المتين", "Al-Mateen", "The Firm"),
    item(54, "الْوَلِيُّ", "الولي", "Al-Waliyy", "The Friend"),
    item(55, "الْحَمِيدُ", "الحميد", "Al-Hameed", "The Praiseworthy"),
    item(56, "الْمُحْصِي", "المحصي", "Al-Muhsee", "The Counter"),
    item(57, "الْمُبْدِئُ", "المبدئ", "Al-Mubdi'", "The Originator"),
    item(58, "الْمُعِيدُ", "المعيد", "Al-Mu'eed", "The Restorer"),
    item(59, "الْمُحْيِي", "المحيي", "Al-Muhyee", "The Giver of Life"),
    item(60, "الْمُمِيتُ", "المميت", "Al-Mumeet", "The Taker of Life"),
    item(61, "الْحَيُّ", "الحي", "Al-Hayy", "The Living"),
    item(62, "الْقَيُّومُ", "القيوم", "Al-Qayyoom", "The Self-Existing"),
    item(63, "الْوَاجِدُ", "الواجد", "Al-Wajid", "The Finder"),
    item(64, "الْمَاجِدُ", "الماجد", "Al-Majid", "The Noble"),
    item(65, "الْوَاحِدُ", "الواحد", "Al-Wahid", "The One"),
    item(66, "الْأَحَدُ", "الأحد", "Al-Ahad", "The Unique"),
    item(67, "الصَّمَدُ", "الصمد", "As-Samad", "The Eternal"),
    item(68, "الْقَادِرُ", "القادر", "Al-Qadir", "The Capable"),
    item(69, "الْمُقْتَدِرُ", "المقتدر", "Al-Muqtadir", "The Powerful"),
    item(70, "الْمُقَدِّمُ", "المقدم", "Al-Muqaddim", "The Expediter"),
    item(71, "الْمُؤَخِّرُ", "المؤخر", "Al-Mu'akhkhir", "The Delayer"),
    item(72, "الْأَوَّلُ", "الأول", "Al-Awwal", "The First"),
    item(73, "الْآخِرُ", "الآخر", "Al-Akhir", "The Last"),
    item(74, "الظَّاهِرُ", "الظاهر", "Az-Zahir", "The Manifest"),
    item(75, "الْبَاطِنُ", "الباطن", "Al-Batin", "The Hidden"),
    item(76, "الْوَالِي", "الوالي", "Al-Wali", "The Governor"),
    item(77, "الْمُتَعَالِي", "المتعالي", "Al-Muta'ali", "The Most Exalted"),
    item(78, "الْبَرُّ", "البر", "Al-Barr", "The Source of Goodness"),
    item(79, "التَّوَّابُ", "التواب", "At-Tawwab", "The Acceptor of Repentance"),
    item(80, "الْمُنْتَقِمُ", "المنتقم", "Al-Muntaqim", "The Avenger"),
    item(81, "الْعَفُوُّ", "العفو", "Al-Afuww", "The Pardoner"),
    item(82, "الرَّؤُوفُ", "الرؤوف", "Ar-Ra'oof", "The Compassionate"),
    item(83, "مَالِكُ الْمُلْكِ", "مالك الملك", "Malik-ul-Mulk", "Owner of All Sovereignty"),
    item(84, "ذُو الْجَلَالِ وَالْإِكْرَامِ", "ذو الجلال والإكرام", "Dhu-l-Jalali wa-l-Ikram", "Lord of Glory and Honor"),
    item(85, "الْمُقْسِطُ", "المقسط", "Al-Muqsit", "The Equitable"),
    item(86, "الْجَامِعُ", "الجامع", "Al-Jami'", "The Gatherer"),
    item(87, "الْغَنِيُّ", "الغني", "Al-Ghaniyy", "The Self-Sufficient"),
    item(88, "الْمُغْنِي", "المغني", "Al-Mughni", "The Enricher"),
    item(89, "الْمَانِعُ", "المانع", "Al-Mani'", "The Preventer"),
    item(90, "الضَّارُّ", "الضار", "Ad-Darr", "The Distresser"),
    item(91, "النَّافِعُ", "النافع", "An-Nafi'", "The Benefiter"),
    item(92, "النُّورُ", "النور", "An-Noor", "The Light"),
    item(93, "الْهَادِي", "الهادي", "Al-Hadi", "The Guide"),
    item(94, "الْبَدِيعُ", "البديع", "Al-Badee'", "The Incomparable"),
    item(95, "الْبَاقِي", "الباقي", "Al-Baqi", "The Everlasting"),
    item(96, "الْوَارِثُ", "الوارث", "Al-Warith", "The Inheritor"),
    item(97, "الرَّشِيدُ", "الرشيد", "Ar-Rasheed", "The Guide to Right Path"),
    item(98, "الصَّبُورُ", "الصبور", "As-Saboor", "The Patient"),
];

/// All entries in catalog order.
pub fn all() -> &'static [NamedItem] {
    &NAMES
}

/// Entry at `index`, if it is inside the catalog.
pub fn get(index: usize) -> Option<&'static NamedItem> {
    NAMES.get(index)
}

/// Entries belonging to `tier`.
pub fn by_tier(tier: Tier) -> &'static [NamedItem] {
    &NAMES[tier.indices()]
}

/// Entries passing `filter`, given a predicate telling whether an index is mastered.
pub fn filter<F>(filter: CatalogFilter, is_mastered: F) -> impl Iterator<Item = &'static NamedItem>
where
    F: Fn(usize) -> bool,
{
    NAMES
        .iter()
        .filter(move |item| filter.matches(item.index, is_mastered(item.index)))
}
