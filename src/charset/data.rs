//! Reference tables for the statistical scorers.
//!
//! Trigram tables hold the most frequent letter trigrams of each language, in
//! lowercase, with a space standing for any run of non-letters. Common
//! character tables hold frequent CJK characters. Both are written as Unicode
//! text and encoded into each charset when the profile set is built.

pub const EN: &[&str] = &[
    " a ", " an", " be", " co", " fo", " ha", " he", " in", " ma", " of", " pr", " re", " sa",
    " st", " th", " to", " wh", "aid", "al ", "an ", "and", "as ", "at ", "ate", "ati", "d a",
    "d t", "e a", "e s", "e t", "ed ", "ent", "er ", "es ", "for", "hat", "he ", "her", "id ",
    "in ", "ing", "ion", "is ", "n a", "n t", "nd ", "ng ", "nt ", "of ", "on ", "or ", "ou ",
    "re ", "rs ", "s a", "s t", "sai", "st ", "t t", "ter", "tha", "the", "tio", "to ",
];

pub const DA: &[&str] = &[
    " af", " at", " de", " di", " en", " er", " et", " fo", " fr", " ha", " i ", " in", " ku",
    " me", " mo", " ne", " og", " om", " på", " sk", " so", " st", " ti", " ud", " va", " vi",
    "af ", "and", "at ", "de ", "den", "der", "det", "e s", "ede", "el ", "en ", "end", "er ",
    "ere", "et ", "for", "ger", "har", "ige", "ing", "ion", "kke", "lle", "men", "nde", "ne ",
    "nge", "nin", "og ", "om ", "på ", "r d", "r e", "rin", "ske", "som", "ter", "til", "ør ",
];

pub const DE: &[&str] = &[
    " au", " da", " de", " di", " ei", " ge", " in", " se", " si", " so", " un", " ve", " vo",
    " we", " wi", " zu", "auf", "aus", "ber", "ch ", "che", "cht", "den", "der", "des", "die",
    "e d", "e s", "ech", "ein", "em ", "en ", "end", "ens", "er ", "ere", "ers", "es ", "gen",
    "ich", "ie ", "in ", "ine", "ist", "it ", "lic", "mit", "n d", "n s", "n u", "nd ", "nde",
    "ne ", "nen", "nge", "r d", "sch", "sie", "st ", "ten", "ter", "und", "ung", "ür ",
];

pub const ES: &[&str] = &[
    " a ", " co", " de", " el", " en", " es", " ha", " la", " lo", " no", " po", " pr", " qu",
    " se", " su", " un", " y ", "a c", "a d", "a e", "a l", "ado", "al ", "an ", "ara", "as ",
    "cia", "ció", "con", "de ", "del", "do ", "e l", "el ", "en ", "ent", "er ", "ero", "es ",
    "est", "ida", "ien", "ión", "la ", "las", "los", "nte", "nto", "o d", "o e", "os ", "par",
    "por", "que", "ra ", "res", "s d", "s e", "to ", "ue ", "una", "ón ",
];

pub const FR: &[&str] = &[
    " a ", " au", " ce", " co", " da", " de", " du", " en", " et", " il", " la", " le", " ne",
    " pa", " po", " pr", " qu", " re", " se", " un", " ét", "ai ", "ait", "ans", "ant", "ce ",
    "de ", "des", "e d", "e l", "e p", "ent", "er ", "es ", "est", "et ", "eur", "ie ", "ion",
    "is ", "it ", "la ", "le ", "les", "lle", "men", "ne ", "nt ", "on ", "ou ", "our", "par",
    "pou", "que", "qui", "re ", "s d", "s l", "t d", "tio", "té ", "une", "ur ", "é d", "été",
];

pub const IT: &[&str] = &[
    " a ", " al", " co", " de", " di", " e ", " il", " in", " la", " le", " no", " pe", " pr",
    " si", " un", "a d", "a p", "a s", "ale", "are", "ato", "che", "con", "del", "di ", "e a",
    "e d", "e i", "e l", "e p", "ell", "ent", "er ", "ere", "gli", "he ", "i a", "i d", "i s",
    "ia ", "il ", "ion", "la ", "lla", "lo ", "na ", "ne ", "no ", "non", "nto", "o a", "o d",
    "ono", "per", "re ", "si ", "sta", "te ", "ti ", "to ", "tà ", "una", "zio",
];

pub const NL: &[&str] = &[
    " aa", " be", " da", " de", " di", " ee", " en", " ge", " he", " hi", " ik", " in", " is",
    " me", " na", " ni", " om", " on", " op", " te", " va", " ve", " vo", " wa", " we", " ze",
    "aar", "an ", "and", "at ", "ch ", "de ", "den", "der", "e b", "e v", "een", "eer", "en ",
    "end", "er ", "ere", "et ", "ge ", "gen", "het", "ijk", "in ", "ing", "jk ", "lij", "n d",
    "n v", "nde", "nie", "oor", "op ", "sch", "te ", "ten", "ter", "van", "ver", "voo",
];

pub const NO: &[&str] = &[
    " av", " de", " en", " er", " et", " fo", " ha", " i ", " me", " og", " om", " på", " sk",
    " so", " st", " ti", " ve", " vi", "al ", "and", "at ", "av ", "de ", "den", "der", "det",
    "e s", "el ", "en ", "ene", "er ", "ere", "et ", "for", "ger", "har", "ikk", "ing", "kke",
    "lle", "men", "nde", "ne ", "nge", "nin", "og ", "om ", "på ", "r d", "r e", "ske", "som",
    "ste", "ter", "til", "tte", "ver", "år ", "ør ", "øre",
];

pub const PT: &[&str] = &[
    " a ", " co", " da", " de", " do", " e ", " em", " es", " na", " no", " o ", " os", " pa",
    " po", " pr", " qu", " se", " um", "a d", "a e", "a p", "açã", "ada", "ado", "ais", "ara",
    "as ", "com", "ção", "de ", "do ", "dos", "e a", "e d", "ent", "er ", "era", "es ", "est",
    "ia ", "ica", "ida", "ma ", "men", "ndo", "nte", "nto", "o d", "o e", "os ", "par", "que",
    "ra ", "res", "s d", "se ", "to ", "tra", "ue ", "uma", "ão ", "ões",
];

pub const SV: &[&str] = &[
    " at", " av", " de", " en", " er", " fö", " ha", " i ", " in", " ka", " me", " oc", " om",
    " på", " sk", " so", " st", " ti", " va", " vi", "an ", "and", "ar ", "arn", "at ", "de ",
    "den", "det", "ed ", "en ", "er ", "ern", "et ", "för", "ga ", "har", "ill", "ing", "lig",
    "lla", "med", "nde", "nge", "nin", "ns ", "och", "om ", "på ", "r d", "r e", "r s", "ska",
    "som", "ste", "str", "ter", "til", "tt ", "var", "äll", "äng", "ör ", "öra",
];

pub const CS: &[&str] = &[
    " a ", " by", " do", " je", " js", " k ", " ma", " na", " ne", " o ", " od", " po", " pr",
    " př", " ro", " se", " sp", " st", " to", " v ", " vy", " z ", " za", "ale", "ani", "ch ",
    "ení", "ho ", "ící", "jak", "je ", "ke ", "kte", "ký ", "la ", "li ", "ly ", "mi ", "ne ",
    "ní ", "ním", "ně ", "nos", "ost", "ou ", "ova", "ovn", "pod", "pro", "pře", "při", "ře ",
    "ský", "sti", "ter", "to ", "ých", "ého", "ém ",
];

pub const HU: &[&str] = &[
    " a ", " az", " be", " eg", " el", " fe", " ha", " ho", " is", " ki", " le", " me", " mi",
    " ne", " sz", " va", " vo", " és", "a k", "a m", "a s", "agy", "ak ", "an ", "ban", "ben",
    "egy", "ek ", "el ", "ell", "em ", "en ", "ere", "et ", "ett", "gy ", "hog", "ik ", "int",
    "is ", "kat", "ket", "le ", "meg", "min", "nak", "nek", "nem", "nt ", "og ", "ogy", "ok ",
    "on ", "ott", "sze", "t a", "tt ", "van", "zer", "ás ", "és ", "ész", "ött", "ől ",
];

pub const PL: &[&str] = &[
    " a ", " by", " ch", " do", " i ", " ja", " je", " ko", " ma", " mi", " na", " ni", " no",
    " od", " pa", " po", " pr", " ro", " si", " sp", " st", " ta", " to", " w ", " wy", " z ",
    " za", " że", "ać ", "ani", "ało", "ch ", "cie", "dzi", "ego", "go ", "ia ", "ich", "ie ",
    "iej", "ię ", "jak", "kie", "nie", "ny ", "owa", "ość", "prz", "rze", "się", "ski", "sta",
    "sz ", "ści", "wie", "ych", "ów ", "ąc ", "ę s", "łem", "że ",
];

pub const RO: &[&str] = &[
    " a ", " ac", " ca", " ce", " co", " cu", " de", " di", " fi", " in", " la", " nu", " pe",
    " pr", " se", " si", " să", " un", " va", " în", " şi", "a c", "a d", "a f", "a p", "ace",
    "al ", "are", "ate", "ca ", "ce ", "cu ", "de ", "din", "e a", "e c", "e d", "e p", "ea ",
    "ei ", "ele", "est", "i a", "i c", "i d", "ii ", "in ", "int", "le ", "lor", "ntr", "nu ",
    "or ", "pe ", "re ", "rea", "să ", "te ", "tru", "ul ", "ări", "şi ", "ţi ",
];

pub const TR: &[&str] = &[
    " bi", " bu", " da", " de", " di", " ha", " il", " iç", " ka", " ki", " ko", " ol", " sa",
    " ve", " ya", " yo", " ço", "an ", "ana", "ar ", "ara", "bir", "da ", "den", "di ", "dı ",
    "e b", "en ", "er ", "eri", "esi", "in ", "ine", "ini", "ir ", "la ", "lar", "le ", "ler",
    "li ", "lı ", "mak", "mek", "n b", "nda", "nde", "nin", "nın", "ola", "r b", "ra ", "rin",
    "rı ", "sı ", "ve ", "yor", "çin", "ğı ", "ğin", "ı b", "ın ", "ına", "ını", "ır ",
];

pub const RU: &[&str] = &[
    " в ", " и ", " бы", " вы", " до", " ег", " за", " ка", " ко", " на", " не", " о ", " от",
    " по", " пр", " ра", " с ", " со", " ст", " то", " чт", " я ", "а в", "а н", "а п", "ая ",
    "аль", "ани", "в с", "го ", "е в", "е п", "ени", "ет ", "и в", "и п", "ие ", "ии ", "ий ",
    "ия ", "как", "ли ", "ль ", "ми ", "на ", "не ", "ни ", "ния", "но ", "о в", "о п", "ов ",
    "ова", "ого", "ой ", "ом ", "ост", "от ", "по ", "пре", "при", "про", "ра ", "ско", "ста",
    "сто", "то ", "ть ", "что", "ый ", "ых ",
];

pub const AR: &[&str] = &[
    " ال", " با", " بع", " عل", " عن", " في", " كا", " لل", " ما", " من", " هذ", " وا", " إل",
    "ات ", "اد ", "ار ", "اء ", "ام ", "ان ", "الأ", "الإ", "الا", "الب", "الت", "الح", "الس",
    "الع", "الق", "الم", "إلى", "ة ا", "ة و", "د ا", "ذا ", "ر ا", "عن ", "على", "في ", "كان",
    "ل ا", "لا ", "لى ", "م ا", "ما ", "من ", "ن ا", "ه ا", "ها ", "هذا", "وال", "ون ", "ى ا",
    "ي ا", "ية ", "ين ",
];

pub const EL: &[&str] = &[
    " αν", " απ", " δι", " ει", " επ", " η ", " κα", " με", " να", " ο ", " οι", " πο", " πρ",
    " σε", " στ", " τα", " τη", " το", " τω", "αι ", "ας ", "από", "για", "ει ", "είν", "ένα",
    "ερι", "ες ", "ης ", "ηση", "ής ", "ια ", "ική", "ίνα", "ία ", "και", "ματ", "μέν", "να ",
    "ναι", "ντα", "ον ", "ος ", "ου ", "ουν", "ού ", "περ", "πό ", "ση ", "σης", "στη", "τα ",
    "ται", "την", "της", "τικ", "το ", "του", "των", "ων ", "ών ", "ότι",
];

pub const HE: &[&str] = &[
    " או", " אנ", " את", " בה", " בי", " גם", " הא", " הו", " הי", " המ", " הת", " וה", " ול",
    " זה", " כי", " כל", " לא", " לה", " מה", " על", " של", "אל ", "אמר", "את ", "גם ", "היה",
    "הם ", "הוא", "ה א", "ה ב", "ה ה", "ה ל", "ה מ", "ה ש", "וא ", "ו ה", "ות ", "זה ", "יה ",
    "יו ", "ים ", "ין ", "ינו", "ירו", "י ה", "כי ", "לא ", "לה ", "ל ה", "מה ", "מר ", "נו ",
    "ני ", "על ", "ר ה", "רה ", "של ", "תי ", "ת ה", "ם ה",
];

/// Frequent Japanese characters, shared by Shift_JIS and EUC-JP.
pub const JA_COMMON: &str = "、。「」・ー\
    のにはをたがでてとしれさいるなかもっうりあくすこんまだよおきつえせそめわ\
    アイウオカキクコサシスタトナラリルレロンテ\
    日本人大年会事一中出者自分時上行見言思生国学社前後同今関発新";

/// Frequent simplified Chinese characters (GB18030).
pub const ZH_HANS_COMMON: &str = "，。、：“”\
    的一是不了在人有我他这个们中来上大为和国地到以说时要就出也得里后自会可下而过天去能对小多然于心\
    学么之都好看起发当没成只如事把还用第样道想作种开美总从无情己面最女但现前些所同日手又行意动方期\
    它头经长儿回位分爱老因很给名法间知世什两次使身者被高已亲其进此话常与活正感";

/// Frequent traditional Chinese characters (Big5).
pub const ZH_HANT_COMMON: &str = "，。、：「」\
    的一是不了在人有我他這個們中來上大為和國地到以說時要就出也得裡後自會可下而過天去能對小多然於心\
    學麼之都好看起發當沒成只如事把還用第樣道想作種開美總從無情己面最女但現前些所同日手又行意動方期\
    它頭經長兒回位分愛老因很給名法間知世什兩次使身者被高已親其進此話常與活正感";

/// Frequent Korean syllables (EUC-KR).
pub const KO_COMMON: &str = "이다의는에하고을가로한지서기사대리자도나를적수시인정일있부국어과보해와\
    습니것들게요제만성주장으우상그전내면원러라여비방동아소학무경계요구오문";
