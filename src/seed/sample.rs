//! Demonstration verses for the two bookend surahs.
//!
//! A full corpus import pulls the complete text from an external dataset;
//! this built-in sample covers Al-Fatihah (all 7 verses) and the opening
//! five verses of Al-Alaq, the first revelation. Every sample verse ships
//! with an English translation and a short tafsir summary; the two verses
//! that open their surahs also carry a revelation context narrative.

/// One verse of the built-in sample, with its attached material.
pub(crate) struct SampleVerse {
    pub surah_id: u16,
    pub verse_number: u16,
    pub text_arabic: &'static str,
    pub text_uthmani: &'static str,
    pub text_simple: &'static str,
    pub juz_number: u16,
    pub hizb_number: u16,
    pub page_number: u16,
    pub translation: &'static str,
    pub tafsir: &'static str,
    /// Revelation occasion narrative, for verses that have one on record.
    pub occasion: Option<&'static str>,
}

pub(crate) const SAMPLE_VERSES: [SampleVerse; 12] = [
    SampleVerse {
        surah_id: 1,
        verse_number: 1,
        text_arabic: "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ",
        text_uthmani: "بِسۡمِ ٱللَّهِ ٱلرَّحۡمَـٰنِ ٱلرَّحِيمِ",
        text_simple: "بسم الله الرحمن الرحيم",
        juz_number: 1,
        hizb_number: 1,
        page_number: 1,
        translation: "In the name of Allah, the Entirely Merciful, the Especially Merciful.",
        tafsir: "This verse, known as the Bismillah, opens almost every surah of the Quran. \
                 It teaches Muslims to begin every action with the remembrance of Allah, \
                 seeking His blessings and mercy.",
        occasion: Some(
            "This was among the first revelations to Prophet Muhammad (peace be upon him) \
             in Mecca, establishing the foundation of all Islamic actions.",
        ),
    },
    SampleVerse {
        surah_id: 1,
        verse_number: 2,
        text_arabic: "الْحَمْدُ لِلَّهِ رَبِّ الْعَالَمِينَ",
        text_uthmani: "ٱلۡحَمۡدُ لِلَّهِ رَبِّ ٱلۡعَـٰلَمِينَ",
        text_simple: "الحمد لله رب العالمين",
        juz_number: 1,
        hizb_number: 1,
        page_number: 1,
        translation: "All praise is due to Allah, Lord of the worlds.",
        tafsir: "This verse establishes that all praise and gratitude belongs to Allah alone, \
                 the Creator and Sustainer of everything that exists. 'Worlds' includes \
                 humans, jinn, angels, and all of creation.",
        occasion: None,
    },
    SampleVerse {
        surah_id: 1,
        verse_number: 3,
        text_arabic: "الرَّحْمَٰنِ الرَّحِيمِ",
        text_uthmani: "ٱلرَّحۡمَـٰنِ ٱلرَّحِيمِ",
        text_simple: "الرحمن الرحيم",
        juz_number: 1,
        hizb_number: 1,
        page_number: 1,
        translation: "The Entirely Merciful, the Especially Merciful.",
        tafsir: "These two names of Allah emphasize His mercy. Ar-Rahman refers to His \
                 all-encompassing mercy for all creation, while Ar-Rahim refers to His \
                 specific mercy for the believers.",
        occasion: None,
    },
    SampleVerse {
        surah_id: 1,
        verse_number: 4,
        text_arabic: "مَالِكِ يَوْمِ الدِّينِ",
        text_uthmani: "مَـٰلِكِ يَوۡمِ ٱلدِّينِ",
        text_simple: "مالك يوم الدين",
        juz_number: 1,
        hizb_number: 1,
        page_number: 1,
        translation: "Sovereign of the Day of Recompense.",
        tafsir: "Allah is the sole Master of the Day of Judgment, when all beings will be \
                 held accountable for their deeds. This reminds us of our ultimate return \
                 to Him.",
        occasion: None,
    },
    SampleVerse {
        surah_id: 1,
        verse_number: 5,
        text_arabic: "إِيَّاكَ نَعْبُدُ وَإِيَّاكَ نَسْتَعِينُ",
        text_uthmani: "إِيَّاكَ نَعۡبُدُ وَإِيَّاكَ نَسۡتَعِينُ",
        text_simple: "إياك نعبد وإياك نستعين",
        juz_number: 1,
        hizb_number: 1,
        page_number: 1,
        translation: "It is You we worship and You we ask for help.",
        tafsir: "This verse is the essence of Islam - dedicating all worship to Allah alone \
                 and seeking help only from Him. It establishes pure monotheism (Tawhid).",
        occasion: None,
    },
    SampleVerse {
        surah_id: 1,
        verse_number: 6,
        text_arabic: "اهْدِنَا الصِّرَاطَ الْمُسْتَقِيمَ",
        text_uthmani: "ٱهۡدِنَا ٱلصِّرَٰطَ ٱلۡمُسۡتَقِيمَ",
        text_simple: "اهدنا الصراط المستقيم",
        juz_number: 1,
        hizb_number: 1,
        page_number: 1,
        translation: "Guide us to the straight path.",
        tafsir: "The greatest supplication a person can make - asking Allah for guidance to \
                 the path of truth, the path of Islam, the path that leads to Paradise.",
        occasion: None,
    },
    SampleVerse {
        surah_id: 1,
        verse_number: 7,
        text_arabic: "صِرَاطَ الَّذِينَ أَنْعَمْتَ عَلَيْهِمْ غَيْرِ الْمَغْضُوبِ عَلَيْهِمْ وَلَا الضَّالِّينَ",
        text_uthmani: "صِرَٰطَ ٱلَّذِينَ أَنۡعَمۡتَ عَلَيۡهِمۡ غَيۡرِ ٱلۡمَغۡضُوبِ عَلَيۡهِمۡ وَلَا ٱلضَّآلِّينَ",
        text_simple: "صراط الذين أنعمت عليهم غير المغضوب عليهم ولا الضالين",
        juz_number: 1,
        hizb_number: 1,
        page_number: 1,
        translation: "The path of those upon whom You have bestowed favor, not of those who \
                      have earned [Your] anger or of those who are astray.",
        tafsir: "This describes the straight path as the way of the prophets, the truthful, \
                 the martyrs, and the righteous - avoiding the path of those who knew the \
                 truth but rejected it, and those who went astray due to ignorance.",
        occasion: None,
    },
    SampleVerse {
        surah_id: 96,
        verse_number: 1,
        text_arabic: "اقْرَأْ بِاسْمِ رَبِّكَ الَّذِي خَلَقَ",
        text_uthmani: "ٱقۡرَأۡ بِٱسۡمِ رَبِّكَ ٱلَّذِي خَلَقَ",
        text_simple: "اقرأ باسم ربك الذي خلق",
        juz_number: 30,
        hizb_number: 60,
        page_number: 597,
        translation: "Read in the name of your Lord who created.",
        tafsir: "The first word revealed to Prophet Muhammad was 'Iqra' (Read/Recite). This \
                 emphasizes the importance of knowledge in Islam and that all learning \
                 should begin with Allah's name.",
        occasion: Some(
            "These were the very first verses revealed to Prophet Muhammad (peace be upon \
             him) in the Cave of Hira through the angel Jibril (Gabriel). The Prophet was \
             40 years old, in the month of Ramadan.",
        ),
    },
    SampleVerse {
        surah_id: 96,
        verse_number: 2,
        text_arabic: "خَلَقَ الْإِنْسَانَ مِنْ عَلَقٍ",
        text_uthmani: "خَلَقَ ٱلۡإِنسَـٰنَ مِنۡ عَلَقٍ",
        text_simple: "خلق الإنسان من علق",
        juz_number: 30,
        hizb_number: 60,
        page_number: 597,
        translation: "Created man from a clinging substance.",
        tafsir: "Allah reminds us of our humble origins - created from a clot of blood \
                 (alaq). This is a scientific miracle as modern embryology confirms the \
                 clinging nature of the early embryo.",
        occasion: None,
    },
    SampleVerse {
        surah_id: 96,
        verse_number: 3,
        text_arabic: "اقْرَأْ وَرَبُّكَ الْأَكْرَمُ",
        text_uthmani: "ٱقۡرَأۡ وَرَبُّكَ ٱلۡأَكۡرَمُ",
        text_simple: "اقرأ وربك الأكرم",
        juz_number: 30,
        hizb_number: 60,
        page_number: 597,
        translation: "Read, and your Lord is the most Generous.",
        tafsir: "Allah encourages seeking knowledge by describing Himself as 'the Most \
                 Generous' - He gives knowledge freely to those who seek it.",
        occasion: None,
    },
    SampleVerse {
        surah_id: 96,
        verse_number: 4,
        text_arabic: "الَّذِي عَلَّمَ بِالْقَلَمِ",
        text_uthmani: "ٱلَّذِي عَلَّمَ بِٱلۡقَلَمِ",
        text_simple: "الذي علم بالقلم",
        juz_number: 30,
        hizb_number: 60,
        page_number: 597,
        translation: "Who taught by the pen.",
        tafsir: "The pen is honored as the instrument of knowledge and civilization. Allah \
                 taught humanity to write, preserving knowledge for future generations.",
        occasion: None,
    },
    SampleVerse {
        surah_id: 96,
        verse_number: 5,
        text_arabic: "عَلَّمَ الْإِنْسَانَ مَا لَمْ يَعْلَمْ",
        text_uthmani: "عَلَّمَ ٱلۡإِنسَـٰنَ مَا لَمۡ يَعۡلَمۡ",
        text_simple: "علم الإنسان ما لم يعلم",
        juz_number: 30,
        hizb_number: 60,
        page_number: 597,
        translation: "Taught man that which he knew not.",
        tafsir: "All knowledge comes from Allah. Humanity knew nothing until Allah taught \
                 us. This should inspire humility and gratitude.",
        occasion: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_covers_both_bookend_surahs() {
        let fatihah = SAMPLE_VERSES.iter().filter(|v| v.surah_id == 1).count();
        let alaq = SAMPLE_VERSES.iter().filter(|v| v.surah_id == 96).count();
        assert_eq!(fatihah, 7);
        assert_eq!(alaq, 5);
    }

    #[test]
    fn verse_numbers_are_sequential_within_each_surah() {
        for surah in [1u16, 96] {
            let numbers: Vec<u16> = SAMPLE_VERSES
                .iter()
                .filter(|v| v.surah_id == surah)
                .map(|v| v.verse_number)
                .collect();
            let expected: Vec<u16> = (1..=numbers.len() as u16).collect();
            assert_eq!(numbers, expected);
        }
    }

    #[test]
    fn only_opening_verses_carry_an_occasion() {
        let with_occasion: Vec<(u16, u16)> = SAMPLE_VERSES
            .iter()
            .filter(|v| v.occasion.is_some())
            .map(|v| (v.surah_id, v.verse_number))
            .collect();
        assert_eq!(with_occasion, vec![(1, 1), (96, 1)]);
    }

    #[test]
    fn every_sample_verse_has_translation_and_tafsir() {
        for verse in &SAMPLE_VERSES {
            assert!(!verse.translation.is_empty());
            assert!(!verse.tafsir.is_empty());
            assert!(!verse.text_arabic.is_empty());
            assert!(!verse.text_uthmani.is_empty());
            assert!(!verse.text_simple.is_empty());
        }
    }
}
