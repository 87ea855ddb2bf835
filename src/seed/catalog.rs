//! The full 114-surah catalog.
//!
//! Names, transliterations, English glosses, and verse counts follow the
//! standard Hafs text; the counts sum to 6236. Revelation category and
//! chronological order are not stored here: the loader derives both from
//! the revelation-order table so the two sources can never disagree.

/// One catalog row, identified by canonical surah number.
pub(crate) struct CatalogSurah {
    pub id: u16,
    pub name: &'static str,
    pub transliteration: &'static str,
    pub translation: &'static str,
    pub verses_count: u16,
}

const fn s(
    id: u16,
    name: &'static str,
    transliteration: &'static str,
    translation: &'static str,
    verses_count: u16,
) -> CatalogSurah {
    CatalogSurah {
        id,
        name,
        transliteration,
        translation,
        verses_count,
    }
}

/// All 114 surahs in canonical order.
pub(crate) const CATALOG: [CatalogSurah; 114] = [
    s(1, "الفاتحة", "Al-Fatihah", "The Opening", 7),
    s(2, "البقرة", "Al-Baqarah", "The Cow", 286),
    s(3, "آل عمران", "Aal-E-Imran", "The Family of Imran", 200),
    s(4, "النساء", "An-Nisa", "The Women", 176),
    s(5, "المائدة", "Al-Ma'idah", "The Table Spread", 120),
    s(6, "الأنعام", "Al-An'am", "The Cattle", 165),
    s(7, "الأعراف", "Al-A'raf", "The Heights", 206),
    s(8, "الأنفال", "Al-Anfal", "The Spoils of War", 75),
    s(9, "التوبة", "At-Tawbah", "The Repentance", 129),
    s(10, "يونس", "Yunus", "Jonah", 109),
    s(11, "هود", "Hud", "Hud", 123),
    s(12, "يوسف", "Yusuf", "Joseph", 111),
    s(13, "الرعد", "Ar-Ra'd", "The Thunder", 43),
    s(14, "إبراهيم", "Ibrahim", "Abraham", 52),
    s(15, "الحجر", "Al-Hijr", "The Rocky Tract", 99),
    s(16, "النحل", "An-Nahl", "The Bee", 128),
    s(17, "الإسراء", "Al-Isra", "The Night Journey", 111),
    s(18, "الكهف", "Al-Kahf", "The Cave", 110),
    s(19, "مريم", "Maryam", "Mary", 98),
    s(20, "طه", "Taha", "Ta-Ha", 135),
    s(21, "الأنبياء", "Al-Anbiya", "The Prophets", 112),
    s(22, "الحج", "Al-Hajj", "The Pilgrimage", 78),
    s(23, "المؤمنون", "Al-Mu'minun", "The Believers", 118),
    s(24, "النور", "An-Nur", "The Light", 64),
    s(25, "الفرقان", "Al-Furqan", "The Criterion", 77),
    s(26, "الشعراء", "Ash-Shu'ara", "The Poets", 227),
    s(27, "النمل", "An-Naml", "The Ant", 93),
    s(28, "القصص", "Al-Qasas", "The Stories", 88),
    s(29, "العنكبوت", "Al-Ankabut", "The Spider", 69),
    s(30, "الروم", "Ar-Rum", "The Romans", 60),
    s(31, "لقمان", "Luqman", "Luqman", 34),
    s(32, "السجدة", "As-Sajdah", "The Prostration", 30),
    s(33, "الأحزاب", "Al-Ahzab", "The Combined Forces", 73),
    s(34, "سبأ", "Saba", "Sheba", 54),
    s(35, "فاطر", "Fatir", "Originator", 45),
    s(36, "يس", "Ya-Sin", "Ya Sin", 83),
    s(37, "الصافات", "As-Saffat", "Those Who Set The Ranks", 182),
    s(38, "ص", "Sad", "The Letter Sad", 88),
    s(39, "الزمر", "Az-Zumar", "The Troops", 75),
    s(40, "غافر", "Ghafir", "The Forgiver", 85),
    s(41, "فصلت", "Fussilat", "Explained in Detail", 54),
    s(42, "الشورى", "Ash-Shura", "The Consultation", 53),
    s(43, "الزخرف", "Az-Zukhruf", "The Ornaments of Gold", 89),
    s(44, "الدخان", "Ad-Dukhan", "The Smoke", 59),
    s(45, "الجاثية", "Al-Jathiyah", "The Crouching", 37),
    s(46, "الأحقاف", "Al-Ahqaf", "The Wind-Curved Sandhills", 35),
    s(47, "محمد", "Muhammad", "Muhammad", 38),
    s(48, "الفتح", "Al-Fath", "The Victory", 29),
    s(49, "الحجرات", "Al-Hujurat", "The Rooms", 18),
    s(50, "ق", "Qaf", "The Letter Qaf", 45),
    s(51, "الذاريات", "Adh-Dhariyat", "The Winnowing Winds", 60),
    s(52, "الطور", "At-Tur", "The Mount", 49),
    s(53, "النجم", "An-Najm", "The Star", 62),
    s(54, "القمر", "Al-Qamar", "The Moon", 55),
    s(55, "الرحمن", "Ar-Rahman", "The Beneficent", 78),
    s(56, "الواقعة", "Al-Waqi'ah", "The Inevitable", 96),
    s(57, "الحديد", "Al-Hadid", "The Iron", 29),
    s(58, "المجادلة", "Al-Mujadila", "The Pleading Woman", 22),
    s(59, "الحشر", "Al-Hashr", "The Exile", 24),
    s(60, "الممتحنة", "Al-Mumtahanah", "She That Is To Be Examined", 13),
    s(61, "الصف", "As-Saff", "The Ranks", 14),
    s(62, "الجمعة", "Al-Jumu'ah", "The Congregation", 11),
    s(63, "المنافقون", "Al-Munafiqun", "The Hypocrites", 11),
    s(64, "التغابن", "At-Taghabun", "The Mutual Disillusion", 18),
    s(65, "الطلاق", "At-Talaq", "The Divorce", 12),
    s(66, "التحريم", "At-Tahrim", "The Prohibition", 12),
    s(67, "الملك", "Al-Mulk", "The Sovereignty", 30),
    s(68, "القلم", "Al-Qalam", "The Pen", 52),
    s(69, "الحاقة", "Al-Haqqah", "The Reality", 52),
    s(70, "المعارج", "Al-Ma'arij", "The Ascending Stairways", 44),
    s(71, "نوح", "Nuh", "Noah", 28),
    s(72, "الجن", "Al-Jinn", "The Jinn", 28),
    s(73, "المزمل", "Al-Muzzammil", "The Enshrouded One", 20),
    s(74, "المدثر", "Al-Muddaththir", "The Cloaked One", 56),
    s(75, "القيامة", "Al-Qiyamah", "The Resurrection", 40),
    s(76, "الإنسان", "Al-Insan", "The Man", 31),
    s(77, "المرسلات", "Al-Mursalat", "The Emissaries", 50),
    s(78, "النبأ", "An-Naba", "The Tidings", 40),
    s(79, "النازعات", "An-Nazi'at", "Those Who Drag Forth", 46),
    s(80, "عبس", "Abasa", "He Frowned", 42),
    s(81, "التكوير", "At-Takwir", "The Overthrowing", 29),
    s(82, "الانفطار", "Al-Infitar", "The Cleaving", 19),
    s(83, "المطففين", "Al-Mutaffifin", "The Defrauding", 36),
    s(84, "الانشقاق", "Al-Inshiqaq", "The Sundering", 25),
    s(85, "البروج", "Al-Buruj", "The Mansions of the Stars", 22),
    s(86, "الطارق", "At-Tariq", "The Nightcomer", 17),
    s(87, "الأعلى", "Al-A'la", "The Most High", 19),
    s(88, "الغاشية", "Al-Ghashiyah", "The Overwhelming", 26),
    s(89, "الفجر", "Al-Fajr", "The Dawn", 30),
    s(90, "البلد", "Al-Balad", "The City", 20),
    s(91, "الشمس", "Ash-Shams", "The Sun", 15),
    s(92, "الليل", "Al-Layl", "The Night", 21),
    s(93, "الضحى", "Ad-Duhaa", "The Morning Hours", 11),
    s(94, "الشرح", "Ash-Sharh", "The Relief", 8),
    s(95, "التين", "At-Tin", "The Fig", 8),
    s(96, "العلق", "Al-Alaq", "The Clot", 19),
    s(97, "القدر", "Al-Qadr", "The Power", 5),
    s(98, "البينة", "Al-Bayyinah", "The Clear Proof", 8),
    s(99, "الزلزلة", "Az-Zalzalah", "The Earthquake", 8),
    s(100, "العاديات", "Al-Adiyat", "The Courser", 11),
    s(101, "القارعة", "Al-Qari'ah", "The Calamity", 11),
    s(102, "التكاثر", "At-Takathur", "The Rivalry in World Increase", 8),
    s(103, "العصر", "Al-Asr", "The Declining Day", 3),
    s(104, "الهمزة", "Al-Humazah", "The Traducer", 9),
    s(105, "الفيل", "Al-Fil", "The Elephant", 5),
    s(106, "قريش", "Quraysh", "Quraysh", 4),
    s(107, "الماعون", "Al-Ma'un", "The Small Kindnesses", 7),
    s(108, "الكوثر", "Al-Kawthar", "The Abundance", 3),
    s(109, "الكافرون", "Al-Kafirun", "The Disbelievers", 6),
    s(110, "النصر", "An-Nasr", "The Divine Support", 3),
    s(111, "المسد", "Al-Masad", "The Palm Fiber", 5),
    s(112, "الإخلاص", "Al-Ikhlas", "The Sincerity", 4),
    s(113, "الفلق", "Al-Falaq", "The Daybreak", 5),
    s(114, "الناس", "An-Nas", "Mankind", 6),
];

/// Editorial blurbs for a few landmark surahs. The description column is
/// optional; most rows carry none.
const DESCRIPTIONS: &[(u16, &str)] = &[
    (
        1,
        "The Opening of the Quran, recited in every unit of the daily prayers.",
    ),
    (
        2,
        "The longest surah, spanning creed, law, and the history of earlier nations.",
    ),
    (36, "Often called the heart of the Quran."),
    (
        55,
        "A litany of divine favors built around a single recurring refrain.",
    ),
    (
        96,
        "Its opening five verses were the first revelation, received in the cave of Hira.",
    ),
    (
        112,
        "A four-verse statement of absolute monotheism.",
    ),
];

pub(crate) fn description_for(id: u16) -> Option<&'static str> {
    DESCRIPTIONS
        .iter()
        .find(|(surah, _)| *surah == id)
        .map(|(_, text)| *text)
}
