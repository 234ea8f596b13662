// ==========================================
// 邮件名单清洗工具 - 姓名启发式数据表
// ==========================================
// 职责: 姓名提取器使用的手工维护数据集
// 红线: 仅存数据，不含算法; 扩展数据不应触碰提取逻辑
// ==========================================

/// 通用邮箱别名（非个人姓名的机构信箱，精确匹配）
///
/// 命中即放弃提取 —— 宁缺毋滥
pub const GENERIC_MAILBOXES: &[&str] = &[
    "info", "contact", "support", "admin", "sales", "hello", "help", "service", "noreply",
    "no-reply", "mail", "email", "office", "team", "hr", "marketing", "billing",
];

/// 常见英文名字典（全小写）
///
/// 用于无分隔符 local-part 的前缀拆分（如 johndoe → john + doe）
pub const COMMON_FIRST_NAMES: &[&str] = &[
    "james", "john", "robert", "michael", "william", "david", "richard", "joseph", "thomas",
    "charles", "christopher", "daniel", "matthew", "anthony", "mark", "donald", "steven", "paul",
    "andrew", "joshua", "kenneth", "kevin", "brian", "george", "edward", "ronald", "timothy",
    "jason", "jeffrey", "ryan", "jacob", "gary", "nicholas", "eric", "jonathan", "stephen",
    "larry", "justin", "scott", "brandon", "benjamin", "samuel", "gregory", "frank", "alexander",
    "raymond", "patrick", "jack", "dennis", "jerry", "peter", "adam", "henry", "nathan",
    "mary", "patricia", "jennifer", "linda", "elizabeth", "barbara", "susan", "jessica", "sarah",
    "karen", "nancy", "lisa", "betty", "margaret", "sandra", "ashley", "kimberly", "emily",
    "donna", "michelle", "dorothy", "carol", "amanda", "melissa", "deborah", "stephanie",
    "rebecca", "sharon", "laura", "cynthia", "kathleen", "amy", "angela", "anna", "ruth",
    "brenda", "pamela", "nicole", "katherine", "samantha", "christine", "emma", "catherine",
    "rachel", "helen", "diane", "olivia", "julia", "victoria", "alice", "megan", "grace",
];
