//! Static message template tables.

/// Language a template is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Chinese,
    Japanese,
    Korean,
    Hebrew,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Chinese,
        Language::Japanese,
        Language::Korean,
        Language::Hebrew,
    ];

    /// Human-readable name with the native form, e.g. `Korean (한국어)`.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "Chinese (简体中文)",
            Language::Japanese => "Japanese (日本語)",
            Language::Korean => "Korean (한국어)",
            Language::Hebrew => "Hebrew (עברית)",
        }
    }

    pub fn templates(self) -> &'static [&'static str] {
        let i = match self {
            Language::English => 0,
            Language::Chinese => 1,
            Language::Japanese => 2,
            Language::Korean => 3,
            Language::Hebrew => 4,
        };
        &ALL_TEMPLATES[i * PER_LANGUAGE..(i + 1) * PER_LANGUAGE]
    }
}

pub const PER_LANGUAGE: usize = 10;

/// All templates, grouped by language in [`Language::ALL`] order.
/// Each group follows the same ten message kinds: welcome, verification code,
/// offer, order, news, reminder, security alert, points, system update, payment.
pub static ALL_TEMPLATES: [&str; 50] = [
    "Welcome {name}! Your account has been verified.",
    "Your verification code is {code}. Valid for 5 minutes.",
    "Special offer: {discount}% off on all items! Use code {code}",
    "Your order #{order} has been confirmed.",
    "Breaking news: {news}!",
    "Reminder: Your appointment is scheduled for {time}",
    "Security alert: New login from {location}",
    "Congratulations! You've earned {points} bonus points",
    "System update: {feature} is now available",
    "Payment of ${amount} received. Transaction ID: {id}",
    "欢迎 {name}！您的账户已验证。",
    "您的验证码是 {code}，5分钟内有效。",
    "特别优惠：全场商品{discount}%折扣！使用代码 {code}",
    "订单 #{order} 已确认。",
    "重要通知：{news}！",
    "提醒：您的预约时间是 {time}",
    "安全提醒：检测到新登录，位置 {location}",
    "恭喜！您获得了 {points} 积分",
    "系统更新：{feature} 功能已上线",
    "收到付款 ${amount}。交易编号：{id}",
    "ようこそ {name}様！アカウントが確認されました。",
    "認証コード：{code}（有効期限5分）",
    "特別セール：全品{discount}%オフ！コード：{code}",
    "注文番号 #{order} が確認されました。",
    "お知らせ：{news}",
    "リマインダー：予約時間は {time} です",
    "セキュリティ警告：新規ログイン場所 {location}",
    "おめでとう！{points} ポイントを獲得しました",
    "システム更新：{feature} が利用可能になりました",
    "支払い完了：${amount}。取引ID：{id}",
    "환영합니다 {name}님! 계정이 인증되었습니다.",
    "인증번호는 {code}입니다. 5분 동안 유효합니다.",
    "특별 할인: 전체 상품 {discount}% 할인! 코드: {code}",
    "주문번호 #{order} 확인되었습니다.",
    "주요 소식: {news}!",
    "알림: 예약 시간은 {time}입니다",
    "보안 경고: 새로운 로그인 위치 {location}",
    "축하합니다! {points} 포인트를 획득하셨습니다",
    "시스템 업데이트: {feature} 기능이 추가되었습니다",
    "결제 완료: ${amount}. 거래 ID: {id}",
    "!ברוך הבא {name}! החשבון שלך אומת",
    "קוד האימות שלך הוא {code}. תקף ל-5 דקות",
    "מבצע מיוחד: {discount}% הנחה על כל הפריטים! השתמש בקוד {code}",
    "הזמנה מספר #{order} אושרה",
    "חדשות חשובות: {news}!",
    "תזכורת: הפגישה שלך נקבעה ל-{time}",
    "התראת אבטחה: כניסה חדשה מ-{location}",
    "מזל טוב! צברת {points} נקודות בונוס",
    "עדכון מערכת: {feature} זמין עכשיו",
    "התקבל תשלום בסך ${amount}. מזהה עסקה: {id}",
];

/// The active template pool: English only, or every language.
pub fn pool(multilingual: bool) -> &'static [&'static str] {
    if multilingual {
        &ALL_TEMPLATES
    } else {
        Language::English.templates()
    }
}
