//! Static translation table for the five UI languages.
//!
//! Each language carries a complete `Translation`; completeness is enforced
//! by the struct type, and lookup is total over the closed `LanguageCode`
//! set.

use crate::types::LanguageCode;

/// UI strings for one language.
#[derive(Debug, Clone)]
pub struct Translation {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub input_section: &'static str,
    pub make: &'static str,
    pub model: &'static str,
    pub year: &'static str,
    pub symptoms: &'static str,
    pub symptoms_placeholder: &'static str,
    pub analyze_button: &'static str,
    pub analyzing: &'static str,
    pub results_title: &'static str,
    pub possible_causes: &'static str,
    pub solutions: &'static str,
    pub severity: &'static str,
    pub warning: &'static str,
    pub safety_tip: &'static str,
    pub visit_mechanic: &'static str,
    pub footer: &'static str,
    pub error: &'static str,
    pub no_results: &'static str,
    pub reset: &'static str,
    pub language: &'static str,
    pub quit: &'static str,
}

pub static TRANSLATION_AR: Translation = Translation {
    title: "تشخيص أعطال السيارات بالذكاء الاصطناعي",
    subtitle: "صِف الأعراض واحصل فورًا على الأعطال المحتملة وأسبابها وحلولها.",
    input_section: "بيانات المركبة",
    make: "الماركة",
    model: "الطراز",
    year: "سنة الصنع",
    symptoms: "الأعراض",
    symptoms_placeholder: "صف المشكلة: أصوات، أضواء تحذير، متى تحدث...",
    analyze_button: "تحليل",
    analyzing: "جارٍ التحليل...",
    results_title: "نتائج التشخيص",
    possible_causes: "الأسباب المحتملة",
    solutions: "الحلول المقترحة",
    severity: "الخطورة",
    warning: "تحذير",
    safety_tip: "هذه الاقتراحات مولّدة بالذكاء الاصطناعي وقد تكون غير دقيقة.",
    visit_mechanic: "استشر دائمًا ميكانيكيًا مختصًا قبل الإصلاح.",
    footer: "أوتوداياج — تشخيص المركبات بمساعدة الذكاء الاصطناعي",
    error: "فشل التشخيص. حاول مرة أخرى.",
    no_results: "لم يتم تحديد أعطال. جرّب وصف الأعراض بتفصيل أكثر.",
    reset: "تشخيص جديد",
    language: "اللغة",
    quit: "خروج",
};

pub static TRANSLATION_EN: Translation = Translation {
    title: "AI Car Fault Diagnosis",
    subtitle: "Describe the symptoms and get instant fault suggestions, causes, and fixes.",
    input_section: "Vehicle Details",
    make: "Make",
    model: "Model",
    year: "Year",
    symptoms: "Symptoms",
    symptoms_placeholder: "Describe the problem: noises, warning lights, when it happens...",
    analyze_button: "Analyze",
    analyzing: "Analyzing...",
    results_title: "Diagnosis Results",
    possible_causes: "Possible Causes",
    solutions: "Suggested Solutions",
    severity: "Severity",
    warning: "Warning",
    safety_tip: "These suggestions are AI-generated and may be inaccurate.",
    visit_mechanic: "Always consult a qualified mechanic before repairs.",
    footer: "AutoDiag — AI-assisted vehicle diagnosis",
    error: "Diagnosis failed. Please try again.",
    no_results: "No faults identified. Try describing the symptoms in more detail.",
    reset: "New Diagnosis",
    language: "Language",
    quit: "Quit",
};

pub static TRANSLATION_FR: Translation = Translation {
    title: "Diagnostic auto par IA",
    subtitle: "Décrivez les symptômes et obtenez pannes probables, causes et solutions.",
    input_section: "Détails du véhicule",
    make: "Marque",
    model: "Modèle",
    year: "Année",
    symptoms: "Symptômes",
    symptoms_placeholder: "Décrivez le problème : bruits, voyants, circonstances...",
    analyze_button: "Analyser",
    analyzing: "Analyse en cours...",
    results_title: "Résultats du diagnostic",
    possible_causes: "Causes possibles",
    solutions: "Solutions proposées",
    severity: "Gravité",
    warning: "Avertissement",
    safety_tip: "Ces suggestions sont générées par IA et peuvent être inexactes.",
    visit_mechanic: "Consultez toujours un mécanicien qualifié avant toute réparation.",
    footer: "AutoDiag — diagnostic véhicule assisté par IA",
    error: "Échec du diagnostic. Veuillez réessayer.",
    no_results: "Aucune panne identifiée. Décrivez les symptômes plus en détail.",
    reset: "Nouveau diagnostic",
    language: "Langue",
    quit: "Quitter",
};

pub static TRANSLATION_DE: Translation = Translation {
    title: "KI-Fahrzeugdiagnose",
    subtitle: "Beschreiben Sie die Symptome und erhalten Sie mögliche Fehler, Ursachen und Lösungen.",
    input_section: "Fahrzeugdaten",
    make: "Marke",
    model: "Modell",
    year: "Baujahr",
    symptoms: "Symptome",
    symptoms_placeholder: "Beschreiben Sie das Problem: Geräusche, Warnleuchten, wann es auftritt...",
    analyze_button: "Analysieren",
    analyzing: "Analyse läuft...",
    results_title: "Diagnoseergebnisse",
    possible_causes: "Mögliche Ursachen",
    solutions: "Lösungsvorschläge",
    severity: "Schweregrad",
    warning: "Warnung",
    safety_tip: "Diese Vorschläge sind KI-generiert und können ungenau sein.",
    visit_mechanic: "Ziehen Sie vor Reparaturen immer eine Fachwerkstatt hinzu.",
    footer: "AutoDiag — KI-gestützte Fahrzeugdiagnose",
    error: "Diagnose fehlgeschlagen. Bitte erneut versuchen.",
    no_results: "Keine Fehler erkannt. Beschreiben Sie die Symptome genauer.",
    reset: "Neue Diagnose",
    language: "Sprache",
    quit: "Beenden",
};

pub static TRANSLATION_ES: Translation = Translation {
    title: "Diagnóstico de averías con IA",
    subtitle: "Describe los síntomas y obtén averías probables, causas y soluciones.",
    input_section: "Datos del vehículo",
    make: "Marca",
    model: "Modelo",
    year: "Año",
    symptoms: "Síntomas",
    symptoms_placeholder: "Describe el problema: ruidos, testigos, cuándo ocurre...",
    analyze_button: "Analizar",
    analyzing: "Analizando...",
    results_title: "Resultados del diagnóstico",
    possible_causes: "Causas posibles",
    solutions: "Soluciones sugeridas",
    severity: "Gravedad",
    warning: "Advertencia",
    safety_tip: "Estas sugerencias son generadas por IA y pueden ser inexactas.",
    visit_mechanic: "Consulta siempre a un mecánico cualificado antes de reparar.",
    footer: "AutoDiag — diagnóstico vehicular asistido por IA",
    error: "El diagnóstico falló. Inténtalo de nuevo.",
    no_results: "No se identificaron averías. Describe los síntomas con más detalle.",
    reset: "Nuevo diagnóstico",
    language: "Idioma",
    quit: "Salir",
};

/// Selector order, matching the original UI.
pub const SUPPORTED_LANGUAGES: &[LanguageCode] = &[
    LanguageCode::Ar,
    LanguageCode::En,
    LanguageCode::Fr,
    LanguageCode::De,
    LanguageCode::Es,
];

/// Get the complete string set for a language.
pub fn translations(lang: LanguageCode) -> &'static Translation {
    match lang {
        LanguageCode::Ar => &TRANSLATION_AR,
        LanguageCode::En => &TRANSLATION_EN,
        LanguageCode::Fr => &TRANSLATION_FR,
        LanguageCode::De => &TRANSLATION_DE,
        LanguageCode::Es => &TRANSLATION_ES,
    }
}
