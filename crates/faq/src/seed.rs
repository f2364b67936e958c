//! Default FAQ dataset the assistant ships with.
//!
//! Stores opened against an empty or partial snapshot are healed from this
//! set, so the ids here are stable identifiers.

use crate::types::{Category, FaqRecord};

fn faq(
    id: u32,
    question: &str,
    answer: &str,
    category: Category,
    asked_count: u32,
    helpful_count: u32,
) -> FaqRecord {
    FaqRecord {
        id,
        question: question.to_string(),
        answer: answer.to_string(),
        category,
        asked_count,
        helpful_count,
    }
}

/// A fresh copy of the built-in college FAQ collection.
pub fn seed_faqs() -> Vec<FaqRecord> {
    use Category::*;

    vec![
        faq(
            1,
            "What are the college timings?",
            "College runs from 9:00 AM to 5:00 PM, Monday to Friday. Weekend classes may vary by department.",
            General,
            45,
            38,
        ),
        faq(
            2,
            "What is the college address and contact information?",
            "You can find the complete college address, phone number, and email on the official college website. For urgent queries, contact the main reception at the college entrance.",
            General,
            25,
            22,
        ),
        faq(
            3,
            "How do I get to the college?",
            "The college is accessible by public transport. Bus routes and metro stations are listed on the college website. Parking facilities are available for students with vehicles.",
            General,
            18,
            16,
        ),
        faq(
            4,
            "What facilities are available in the college?",
            "The college provides library, computer labs, sports facilities, cafeteria, medical room, auditorium, and Wi-Fi connectivity throughout the campus.",
            General,
            30,
            28,
        ),
        faq(
            5,
            "How can I contact my professors?",
            "You can contact professors during their office hours (posted on department notice boards) or via email. Email addresses are available on the college website or department portal.",
            General,
            42,
            38,
        ),
        faq(
            6,
            "How can I get my ID card?",
            "Visit the admin office with your admission receipt and a passport photo. ID cards are usually issued within 2-3 working days after submission of documents.",
            Administration,
            32,
            28,
        ),
        faq(
            7,
            "How do I apply for a duplicate ID card?",
            "Submit an application form at the admin office with a police complaint copy (if lost) or damaged card. A fee may be applicable for duplicate ID cards.",
            Administration,
            15,
            14,
        ),
        faq(
            8,
            "What documents do I need for admission?",
            "Required documents include: 10th and 12th mark sheets, transfer certificate, character certificate, caste certificate (if applicable), passport photos, and admission form. Check the admission brochure for complete list.",
            Administration,
            55,
            50,
        ),
        faq(
            9,
            "How can I get a bonafide certificate?",
            "Apply at the admin office with your student ID. Bonafide certificates are usually issued within 2-3 working days. Some cases may require department approval.",
            Administration,
            28,
            25,
        ),
        faq(
            10,
            "Where can I pay my fees?",
            "Fees can be paid online through the college portal or at the accounts office during working hours. Payment receipts are issued immediately after payment.",
            Administration,
            40,
            36,
        ),
        faq(
            11,
            "How do I apply for a leave of absence?",
            "Submit a leave application form to your class coordinator or department head. For extended leaves, approval from the principal may be required. Medical leaves require a doctor's certificate.",
            Administration,
            22,
            20,
        ),
        faq(
            12,
            "What is the procedure for course registration?",
            "Course registration is done online through the student portal during the registration period. Check the academic calendar for registration dates. Contact your academic advisor for guidance.",
            Administration,
            35,
            32,
        ),
        faq(
            13,
            "Where can I find exam schedules?",
            "Exam schedules are uploaded on the college website and notice board 2 weeks before exams. You can also check the student portal for your personal exam timetable.",
            Exams,
            67,
            62,
        ),
        faq(
            14,
            "What is the exam pattern and marking scheme?",
            "Exams typically include internal assessments (40%) and end-semester exams (60%). Internal marks include assignments, quizzes, and attendance. Check your course syllabus for detailed breakdown.",
            Exams,
            38,
            35,
        ),
        faq(
            15,
            "How do I apply for exam revaluation?",
            "Submit a revaluation application form at the examination cell within 7 days of result declaration. A revaluation fee is applicable. Results are usually declared within 15-20 days.",
            Exams,
            20,
            18,
        ),
        faq(
            16,
            "What should I do if I miss an exam?",
            "Contact the examination cell immediately with a valid reason (medical emergency, etc.) and supporting documents. You may be allowed to appear for a supplementary exam if approved.",
            Exams,
            15,
            14,
        ),
        faq(
            17,
            "Where can I get my exam hall ticket?",
            "Hall tickets are available for download from the student portal 1 week before exams. You can also collect a printed copy from the examination cell if needed.",
            Exams,
            25,
            23,
        ),
        faq(
            18,
            "What items are allowed in the examination hall?",
            "Only hall ticket, student ID, pens, pencils, and calculators (if permitted) are allowed. Mobile phones, smartwatches, and electronic devices are strictly prohibited.",
            Exams,
            30,
            28,
        ),
        faq(
            19,
            "When are exam results declared?",
            "Results are usually declared within 3-4 weeks after the last exam. Check the college website or student portal for result announcements and updates.",
            Exams,
            45,
            42,
        ),
        faq(
            20,
            "What is the library timing?",
            "Library is open from 8:00 AM to 8:00 PM on weekdays, and 9:00 AM to 5:00 PM on weekends. Reading room facilities are available during these hours.",
            Library,
            28,
            25,
        ),
        faq(
            21,
            "How many books can I borrow from the library?",
            "Students can borrow up to 3 books at a time for a period of 14 days. Books can be renewed once if not reserved by another student.",
            Library,
            22,
            20,
        ),
        faq(
            22,
            "What is the fine for late return of books?",
            "Late return fine is ₹5 per day per book. Maximum fine may be capped at the book's cost. Clear all dues before borrowing new books.",
            Library,
            18,
            16,
        ),
        faq(
            23,
            "How do I access e-books and online journals?",
            "E-books and online journals are accessible through the library portal using your student credentials. Contact the librarian for login details and access instructions.",
            Library,
            25,
            23,
        ),
        faq(
            24,
            "Can I reserve a book that is currently issued?",
            "Yes, you can reserve books through the library management system. You will be notified when the book becomes available. Reserved books are held for 3 days.",
            Library,
            12,
            11,
        ),
        faq(
            25,
            "Does the library have study rooms or group discussion areas?",
            "Yes, the library has designated study rooms and group discussion areas. These can be booked in advance through the library counter or online portal.",
            Library,
            20,
            18,
        ),
        faq(
            26,
            "Where can I find my course syllabus?",
            "Course syllabus is available on the college website under the academics section, in the student portal, or from your department office. You can also request it from your course instructor.",
            Academics,
            35,
            32,
        ),
        faq(
            27,
            "How do I change my course or specialization?",
            "Submit an application to your department head and academic advisor. Course changes are subject to availability, eligibility criteria, and approval from the academic committee.",
            Academics,
            15,
            14,
        ),
        faq(
            28,
            "What is the attendance requirement?",
            "Minimum 75% attendance is required to be eligible for exams. Students with less than 75% may need to apply for condonation with valid reasons and supporting documents.",
            Academics,
            50,
            45,
        ),
        faq(
            29,
            "How can I check my attendance?",
            "Attendance is updated regularly on the student portal. You can also check with your class coordinator or department office for attendance records.",
            Academics,
            40,
            36,
        ),
        faq(
            30,
            "Where can I get assignment guidelines?",
            "Assignment guidelines are provided by course instructors at the beginning of the semester. They are also available on the course portal or can be obtained from your department.",
            Academics,
            28,
            25,
        ),
        faq(
            31,
            "What is the deadline for submitting assignments?",
            "Assignment deadlines are announced by course instructors. Late submissions may result in grade reduction. Check your course schedule or contact your instructor for specific dates.",
            Academics,
            32,
            29,
        ),
        faq(
            32,
            "How do I apply for a scholarship?",
            "Scholarship applications are available at the accounts office or student welfare office. Submit required documents before the deadline. Merit-based and need-based scholarships are available.",
            Academics,
            25,
            23,
        ),
        faq(
            33,
            "How do I apply for hostel accommodation?",
            "Hostel applications are available at the hostel office. Submit the application form with required documents during the admission period. Allocation is based on availability and distance from college.",
            Hostel,
            20,
            18,
        ),
        faq(
            34,
            "What are the hostel fees and facilities?",
            "Hostel fees vary by room type (single, double, triple sharing). Facilities include mess, Wi-Fi, laundry, common room, and 24/7 security. Contact the hostel office for current fee structure.",
            Hostel,
            18,
            16,
        ),
        faq(
            35,
            "What are the hostel rules and regulations?",
            "Hostel rules include curfew timings, visitor policies, mess timings, and code of conduct. Detailed rules are provided at the time of hostel allocation and are available at the hostel office.",
            Hostel,
            15,
            14,
        ),
        faq(
            36,
            "Does the college provide bus transportation?",
            "Yes, the college operates buses on various routes. Bus passes can be obtained from the transport office. Route details and timings are available on the college website.",
            Transportation,
            22,
            20,
        ),
        faq(
            37,
            "How do I get a bus pass?",
            "Apply for a bus pass at the transport office with your student ID and passport photo. Bus passes are valid for one semester and can be renewed before expiry.",
            Transportation,
            18,
            16,
        ),
        faq(
            38,
            "What sports facilities are available?",
            "The college has facilities for cricket, football, basketball, volleyball, badminton, table tennis, and a gymnasium. Sports equipment can be borrowed from the sports office.",
            Sports,
            20,
            18,
        ),
        faq(
            39,
            "How can I join a club or society?",
            "Club registrations are open at the beginning of each semester. Visit the student activities office or check the college website for club listings and registration details.",
            Activities,
            25,
            23,
        ),
        faq(
            40,
            "When are cultural events and festivals organized?",
            "Cultural events and festivals are organized throughout the year. Major events include annual day, technical fest, and cultural fest. Check the events calendar on the college website.",
            Activities,
            18,
            16,
        ),
        faq(
            41,
            "How do I register for placements?",
            "Register through the placement portal using your student credentials. Complete your profile, upload resume, and attend placement training sessions. Contact the placement cell for assistance.",
            Placement,
            45,
            42,
        ),
        faq(
            42,
            "What companies visit for campus recruitment?",
            "Various companies from IT, finance, manufacturing, and other sectors visit for recruitment. The placement cell maintains a list of visiting companies. Check the placement portal for updates.",
            Placement,
            38,
            35,
        ),
        faq(
            43,
            "How can I get internship opportunities?",
            "Internship opportunities are posted on the placement portal and college notice boards. You can also approach the placement cell for guidance. Some departments also provide internship assistance.",
            Placement,
            30,
            28,
        ),
        faq(
            44,
            "How do I get Wi-Fi access on campus?",
            "Wi-Fi credentials are provided at the time of admission. Contact the IT department if you need new credentials or face connectivity issues. Wi-Fi is available throughout the campus.",
            IT,
            35,
            32,
        ),
        faq(
            45,
            "What if I forget my student portal password?",
            "Use the 'Forgot Password' option on the student portal login page. You can reset your password using your registered email or contact the IT department for assistance.",
            IT,
            28,
            25,
        ),
        faq(
            46,
            "How do I access computer labs?",
            "Computer labs are accessible during lab hours as per your timetable. For additional access, contact your department or lab in-charge. Lab rules and usage guidelines are posted in each lab.",
            IT,
            20,
            18,
        ),
        faq(
            47,
            "Is there a medical facility on campus?",
            "Yes, the college has a medical room with a nurse available during college hours. For emergencies, contact the medical room or security office. First aid facilities are available.",
            Medical,
            15,
            14,
        ),
        faq(
            48,
            "How do I get a medical certificate?",
            "Visit the college medical room or get a certificate from a registered medical practitioner. Medical certificates are required for leave applications and exam exemptions.",
            Medical,
            18,
            16,
        ),
        faq(
            49,
            "Where is the cafeteria located?",
            "The cafeteria is located on the ground floor near the main building. It serves breakfast, lunch, snacks, and beverages. Operating hours are 8:00 AM to 6:00 PM.",
            General,
            25,
            23,
        ),
        faq(
            50,
            "How can I file a complaint or suggestion?",
            "Complaints and suggestions can be submitted through the student portal, suggestion box at the admin office, or via email to the student council. Anonymous complaints are also accepted.",
            General,
            20,
            18,
        ),
        faq(
            51,
            "What is the dress code?",
            "The college follows a formal dress code. Students are expected to wear neat and presentable attire. Specific dress code guidelines are available in the student handbook.",
            General,
            15,
            14,
        ),
        faq(
            52,
            "How do I get a transcript or mark sheet?",
            "Apply for transcripts at the examination cell or admin office. Transcripts are usually issued within 7-10 working days. A fee is applicable for transcript requests.",
            Administration,
            22,
            20,
        ),
    ]
}
