//! Built-in bilingual content.
//!
//! Rows are `(topic, hindi, english)`. `PhraseTable::builtin` validates that
//! every `Topic` appears here with both strings filled in.

use super::topic::Topic;

pub(super) const PHRASES: &[(Topic, &str, &str)] = &[
    (
        Topic::Welcome,
        "नमस्ते! मैं आपका स्वास्थ्य सहायक हूँ। मैं आपकी कैसे मदद कर सकता हूँ?",
        "Hello! I'm your health assistant. How can I help you today?",
    ),
    // --- Fever flow ---
    (
        Topic::FeverPrompt,
        "बुखार कितने दिन से है? कृपया बताएं:",
        "How many days have you had fever? Please tell me:",
    ),
    (Topic::FeverOptionOneDay, "1 दिन", "1 day"),
    (Topic::FeverOptionTwoThreeDays, "2-3 दिन", "2-3 days"),
    (Topic::FeverOptionFourPlusDays, "4+ दिन", "4+ days"),
    (
        Topic::FeverAdviceOneDay,
        "1 दिन का बुखार चिंता की बात नहीं। आराम करें, पानी पिएं। यदि बुखार 102°F से ज्यादा हो तो डॉक्टर से मिलें।",
        "1-day fever is not concerning. Rest and drink water. See a doctor if fever is above 102°F.",
    ),
    (
        Topic::FeverAdviceTwoThreeDays,
        "2-3 दिन का बुखार हो तो डॉक्टर से सलाह लें। पैरासिटामोल ले सकते हैं। नजदीकी PHC जाएं।",
        "For 2-3 days fever, consult a doctor. You can take paracetamol. Visit nearby PHC.",
    ),
    (
        Topic::FeverAdviceFourPlusDays,
        "4+ दिन का बुखार गंभीर हो सकता है। तुरंत डॉक्टर से मिलें। ब्लड टेस्ट की जरूरत हो सकती है।",
        "4+ days fever can be serious. See a doctor immediately. Blood test may be needed.",
    ),
    // --- Cough flow ---
    (
        Topic::CoughPrompt,
        "खांसी के साथ कोई और लक्षण है?",
        "Do you have any other symptoms with the cough?",
    ),
    (Topic::CoughOptionWithFever, "बुखार भी है", "Also have fever"),
    (Topic::CoughOptionBreathing, "सांस लेने में तकलीफ", "Breathing difficulty"),
    (Topic::CoughOptionOnly, "सिर्फ खांसी", "Only cough"),
    (
        Topic::CoughAdviceWithFever,
        "खांसी और बुखार साथ हो तो इन्फेक्शन हो सकता है। डॉक्टर से मिलें। गर्म पानी पिएं।",
        "Cough with fever might be an infection. See a doctor. Drink warm water.",
    ),
    (
        Topic::CoughAdviceBreathing,
        "🚨 सांस लेने में तकलीफ गंभीर है। तुरंत अस्पताल जाएं या 108 कॉल करें।",
        "🚨 Breathing difficulty is serious. Go to hospital immediately or call 108.",
    ),
    (
        Topic::CoughAdviceOnly,
        "सिर्फ खांसी हो तो शहद-अदरक लें। धूम्रपान न करें। 3 दिन में ठीक न हो तो डॉक्टर से मिलें।",
        "For just cough, take honey-ginger. Don't smoke. See doctor if not better in 3 days.",
    ),
    // --- Free-text symptom questions ---
    (
        Topic::HeadacheQuestion,
        "सिरदर्द कितनी देर से है? क्या आराम करने से कम हो जाता है?",
        "How long have you had the headache? Does it reduce with rest?",
    ),
    (
        Topic::StomachQuestion,
        "पेट दर्द कैसा है? तेज़ है या धीमा? खाना खाने के बाद बढ़ता है?",
        "How is the stomach pain? Sharp or dull? Does it increase after eating?",
    ),
    // --- Appointment / emergency ---
    (
        Topic::Appointment,
        "नजदीकी स्वास्थ्य केंद्र देखने के लिए 'केंद्र देखें' दबाएं।",
        "Press 'View Centers' to see nearby health facilities.",
    ),
    (Topic::AppointmentOptionCenters, "केंद्र देखें", "View Centers"),
    (
        Topic::AppointmentOptionAsha,
        "ASHA कार्यकर्ता से बात करें",
        "Talk to ASHA Worker",
    ),
    (
        Topic::Emergency,
        "🚨 आपातकाल की स्थिति में तुरंत 108 पर कॉल करें!",
        "🚨 In emergency, immediately call 108!",
    ),
    // --- Follow-up offers ---
    (
        Topic::FacilityOffer,
        "नजदीकी स्वास्थ्य केंद्र देखना चाहते हैं?",
        "Would you like to see nearby health centers?",
    ),
    (Topic::FacilityOptionYes, "हाँ, दिखाएं", "Yes, show me"),
    (Topic::FacilityOptionNo, "नहीं, धन्यवाद", "No, thank you"),
    (
        Topic::MoreTipsOffer,
        "और कोई स्वास्थ्य जानकारी चाहिए?",
        "Do you need more health information?",
    ),
    (Topic::MoreTipsOptionYes, "हाँ, और बताएं", "Yes, tell more"),
    (Topic::MoreTipsOptionThanks, "धन्यवाद", "Thank you"),
    (
        Topic::AshaContact,
        "आशा कार्यकर्ता सुनीता देवी से संपर्क करें: 📞 9876543210",
        "Contact ASHA Worker Sunita Devi: 📞 9876543210",
    ),
    (
        Topic::ThanksReply,
        "आपका स्वागत है! और कोई मदद चाहिए तो पूछें। स्वस्थ रहें! 🙏",
        "You're welcome! Ask if you need more help. Stay healthy! 🙏",
    ),
    (
        Topic::VoiceNoteReply,
        "मैंने आपका voice message सुना। कृपया text में भी बता सकते हैं?",
        "I heard your voice message. Can you please also type it?",
    ),
    // --- Fallbacks ---
    (
        Topic::FallbackUnderstand,
        "मैं समझ गया। क्या आप अपने लक्षणों के बारे में और बता सकते हैं?",
        "I understand. Can you tell me more about your symptoms?",
    ),
    (
        Topic::FallbackChooseOptions,
        "अधिक जानकारी के लिए नीचे दिए गए विकल्पों में से चुनें।",
        "Please choose from the options below for more information.",
    ),
    (
        Topic::FallbackSeeDoctor,
        "यदि यह गंभीर है तो कृपया तुरंत डॉक्टर से मिलें।",
        "If this is serious, please see a doctor immediately.",
    ),
    // --- Symptom menu ---
    (
        Topic::SymptomMenuPrompt,
        "आपको कौन सा लक्षण है? बताएं:",
        "What symptoms do you have? Please tell me:",
    ),
    (Topic::SymptomMenuFever, "बुखार", "Fever"),
    (Topic::SymptomMenuCough, "खांसी", "Cough"),
    (Topic::SymptomMenuHeadache, "सिरदर्द", "Headache"),
    (Topic::SymptomMenuStomach, "पेट दर्द", "Stomach Pain"),
    // --- Quick action labels ---
    (Topic::QuickSymptoms, "लक्षण जांच", "Check Symptoms"),
    (Topic::QuickAppointment, "अपॉइंटमेंट", "Book Appointment"),
    (Topic::QuickEmergency, "आपातकाल", "Emergency Help"),
    (Topic::QuickEducation, "स्वास्थ्य टिप्स", "Health Tips"),
];

/// `((title_hi, title_en), (content_hi, content_en))`
pub(super) const HEALTH_TIPS: &[((&str, &str), (&str, &str))] = &[
    (
        ("टीकाकरण शेड्यूल", "Vaccination Schedule"),
        (
            "बच्चों के लिए जरूरी टीके समय पर लगवाना जरूरी है।",
            "It's important to get children vaccinated on time.",
        ),
    ),
    (
        ("मातृत्व देखभाल", "Maternal Care"),
        (
            "गर्भावस्था में नियमित जांच कराना आवश्यक है।",
            "Regular checkups during pregnancy are essential.",
        ),
    ),
    (
        ("मधुमेह प्रबंधन", "Diabetes Management"),
        (
            "डायबिटीज़ को नियंत्रित रखने के लिए दवा और खान-पान दोनों पर ध्यान दें।",
            "Control diabetes with proper medication and diet.",
        ),
    ),
];
