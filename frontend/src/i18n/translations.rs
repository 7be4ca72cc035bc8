//! Static translation tables. Every locale carries exactly the keys in
//! `KEYS`; the tests at the bottom of this file enforce that.

use super::Locale;

pub type Table = &'static [(&'static str, &'static str)];

#[cfg(test)]
pub const KEYS: &[&str] = &[
    // Header
    "services",
    "portfolio",
    "about",
    "contact",
    "brandName",
    "switchLanguage",
    "menu",
    // Hero
    "heroTitle",
    "heroSubtitle",
    "heroDescription",
    "getStarted",
    "learnMore",
    "successRate",
    // Services
    "servicesTitle",
    "servicesSubtitle",
    "seoTitle",
    "seoDescription",
    "socialMediaTitle",
    "socialMediaDescription",
    "ppcTitle",
    "ppcDescription",
    "contentTitle",
    "contentDescription",
    "webDevTitle",
    "webDevDescription",
    "analyticsTitle",
    "analyticsDescription",
    // Portfolio
    "portfolioTitle",
    "portfolioSubtitle",
    "viewProject",
    // About
    "aboutTitle",
    "aboutSubtitle",
    "aboutDescription",
    "yearsExperience",
    "clientsServed",
    "projectsCompleted",
    "teamMembers",
    "awardWinning",
    // Contact
    "contactTitle",
    "contactSubtitle",
    "nameLabel",
    "emailLabel",
    "phoneLabel",
    "messageLabel",
    "sendMessage",
    "officeAddress",
    "callUs",
    "emailUs",
    "interactiveMap",
    "messageSent",
    "fieldRequired",
    "invalidEmail",
    "submitFailed",
    // Footer
    "quickLinks",
    "followUs",
    "allRightsReserved",
    "footerTagline",
];

const EN: Table = &[
    ("services", "Services"),
    ("portfolio", "Portfolio"),
    ("about", "About"),
    ("contact", "Contact"),
    ("brandName", "Qatar Digital"),
    ("switchLanguage", "العربية"),
    ("menu", "Menu"),
    ("heroTitle", "Digital Marketing Excellence"),
    ("heroSubtitle", "in the Heart of Qatar"),
    (
        "heroDescription",
        "We help businesses in Qatar grow their digital presence with cutting-edge marketing strategies and innovative solutions.",
    ),
    ("getStarted", "Get Started"),
    ("learnMore", "Learn More"),
    ("successRate", "Success Rate"),
    ("servicesTitle", "Our Services"),
    ("servicesSubtitle", "Comprehensive Digital Solutions"),
    ("seoTitle", "SEO Optimization"),
    ("seoDescription", "Boost your search rankings with our Qatar-focused SEO strategies."),
    ("socialMediaTitle", "Social Media Marketing"),
    ("socialMediaDescription", "Engage your audience across all major social platforms."),
    ("ppcTitle", "PPC Advertising"),
    ("ppcDescription", "Maximize ROI with targeted pay-per-click campaigns."),
    ("contentTitle", "Content Marketing"),
    ("contentDescription", "Create compelling content that converts visitors into customers."),
    ("webDevTitle", "Web Development"),
    ("webDevDescription", "Build stunning websites that perform across all devices."),
    ("analyticsTitle", "Analytics & Reporting"),
    ("analyticsDescription", "Track performance with detailed analytics and insights."),
    ("portfolioTitle", "Our Work"),
    ("portfolioSubtitle", "Success Stories from Qatar"),
    ("viewProject", "View Project"),
    ("aboutTitle", "About Us"),
    ("aboutSubtitle", "Your Trusted Digital Partner in Qatar"),
    (
        "aboutDescription",
        "We are a leading digital marketing agency based in Doha, Qatar. With over 5 years of experience, we have helped hundreds of local and international businesses establish their digital presence in the Qatari market.",
    ),
    ("yearsExperience", "Years Experience"),
    ("clientsServed", "Clients Served"),
    ("projectsCompleted", "Projects Completed"),
    ("teamMembers", "Team Members"),
    ("awardWinning", "Award Winning"),
    ("contactTitle", "Get In Touch"),
    ("contactSubtitle", "Ready to Grow Your Business?"),
    ("nameLabel", "Full Name"),
    ("emailLabel", "Email Address"),
    ("phoneLabel", "Phone Number"),
    ("messageLabel", "Message"),
    ("sendMessage", "Send Message"),
    ("officeAddress", "Office Address"),
    ("callUs", "Call Us"),
    ("emailUs", "Email Us"),
    ("interactiveMap", "Interactive Map"),
    ("messageSent", "Thank you! Your message has been sent."),
    ("fieldRequired", "Please fill in all required fields."),
    ("invalidEmail", "Please enter a valid email address."),
    ("submitFailed", "Something went wrong. Please try again."),
    ("quickLinks", "Quick Links"),
    ("followUs", "Follow Us"),
    ("allRightsReserved", "All rights reserved."),
    (
        "footerTagline",
        "Leading digital marketing agency in Qatar, helping businesses grow and thrive in the digital age.",
    ),
];

const AR: Table = &[
    ("services", "الخدمات"),
    ("portfolio", "أعمالنا"),
    ("about", "من نحن"),
    ("contact", "اتصل بنا"),
    ("brandName", "قطر ديجيتال"),
    ("switchLanguage", "English"),
    ("menu", "القائمة"),
    ("heroTitle", "التميز في التسويق الرقمي"),
    ("heroSubtitle", "في قلب قطر"),
    (
        "heroDescription",
        "نساعد الشركات في قطر على نمو حضورها الرقمي من خلال استراتيجيات التسويق المتطورة والحلول المبتكرة.",
    ),
    ("getStarted", "ابدأ الآن"),
    ("learnMore", "اعرف المزيد"),
    ("successRate", "نسبة النجاح"),
    ("servicesTitle", "خدماتنا"),
    ("servicesSubtitle", "حلول رقمية شاملة"),
    ("seoTitle", "تحسين محركات البحث"),
    ("seoDescription", "عزز ترتيبك في نتائج البحث باستراتيجياتنا المركزة على قطر."),
    ("socialMediaTitle", "التسويق عبر وسائل التواصل"),
    ("socialMediaDescription", "تفاعل مع جمهورك عبر جميع منصات التواصل الرئيسية."),
    ("ppcTitle", "الإعلانات المدفوعة"),
    ("ppcDescription", "اعظم العائد على الاستثمار مع حملات إعلانية مستهدفة."),
    ("contentTitle", "تسويق المحتوى"),
    ("contentDescription", "أنشئ محتوى مقنع يحول الزوار إلى عملاء."),
    ("webDevTitle", "تطوير المواقع"),
    ("webDevDescription", "ابني مواقع إلكترونية مذهلة تعمل على جميع الأجهزة."),
    ("analyticsTitle", "التحليلات والتقارير"),
    ("analyticsDescription", "تتبع الأداء مع تحليلات مفصلة ورؤى عميقة."),
    ("portfolioTitle", "أعمالنا"),
    ("portfolioSubtitle", "قصص نجاح من قطر"),
    ("viewProject", "عرض المشروع"),
    ("aboutTitle", "من نحن"),
    ("aboutSubtitle", "شريكك الرقمي الموثوق في قطر"),
    (
        "aboutDescription",
        "نحن وكالة تسويق رقمي رائدة مقرها في الدوحة، قطر. مع أكثر من 5 سنوات من الخبرة، ساعدنا المئات من الشركات المحلية والعالمية في تأسيس حضورها الرقمي في السوق القطري.",
    ),
    ("yearsExperience", "سنوات خبرة"),
    ("clientsServed", "عميل"),
    ("projectsCompleted", "مشروع مكتمل"),
    ("teamMembers", "عضو فريق"),
    ("awardWinning", "حائزون على جوائز"),
    ("contactTitle", "تواصل معنا"),
    ("contactSubtitle", "مستعد لتنمية عملك؟"),
    ("nameLabel", "الاسم الكامل"),
    ("emailLabel", "البريد الإلكتروني"),
    ("phoneLabel", "رقم الهاتف"),
    ("messageLabel", "الرسالة"),
    ("sendMessage", "إرسال الرسالة"),
    ("officeAddress", "عنوان المكتب"),
    ("callUs", "اتصل بنا"),
    ("emailUs", "راسلنا"),
    ("interactiveMap", "خريطة تفاعلية"),
    ("messageSent", "شكراً لك! تم إرسال رسالتك."),
    ("fieldRequired", "يرجى ملء جميع الحقول المطلوبة."),
    ("invalidEmail", "يرجى إدخال بريد إلكتروني صحيح."),
    ("submitFailed", "حدث خطأ ما. يرجى المحاولة مرة أخرى."),
    ("quickLinks", "روابط سريعة"),
    ("followUs", "تابعنا"),
    ("allRightsReserved", "جميع الحقوق محفوظة."),
    (
        "footerTagline",
        "نحن وكالة تسويق رقمي رائدة في قطر، نساعد الشركات على النمو والازدهار في العصر الرقمي.",
    ),
];

pub fn table(locale: Locale) -> Table {
    match locale {
        Locale::En => EN,
        Locale::Ar => AR,
    }
}

/// Returns `None` when the key is absent; callers decide the fallback.
pub fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    table(locale)
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, text)| *text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_locale_has_exactly_the_declared_keys() {
        let declared: HashSet<&str> = KEYS.iter().copied().collect();
        assert_eq!(declared.len(), KEYS.len(), "duplicate entry in KEYS");

        for locale in Locale::ALL {
            let keys: Vec<&str> = table(*locale).iter().map(|(key, _)| *key).collect();
            let unique: HashSet<&str> = keys.iter().copied().collect();
            assert_eq!(unique.len(), keys.len(), "duplicate key in {:?} table", locale);
            assert_eq!(unique, declared, "key set mismatch in {:?} table", locale);
        }
    }

    #[test]
    fn no_entry_is_blank() {
        for locale in Locale::ALL {
            for (key, text) in table(*locale) {
                assert!(!text.trim().is_empty(), "{:?}/{} is blank", locale, key);
            }
        }
    }

    #[test]
    fn switch_label_names_the_other_language() {
        assert_eq!(lookup(Locale::En, "switchLanguage"), Some(Locale::Ar.native_name()));
        assert_eq!(lookup(Locale::Ar, "switchLanguage"), Some(Locale::En.native_name()));
    }
}
