use crate::types::ContentSpecification;

/// Produces the minimal specification served when personalization fails.
/// A single fixed template over subject and concept; no profile, device, or
/// table lookups, so this path itself cannot fail.
pub fn fallback(subject: &str, concept: &str) -> ContentSpecification {
    ContentSpecification::plain(format!(
        "创建一个{0}学习场景，重点学习{1}概念：\n\
         \n\
         在《星语低语》的神秘外星基地中，学生作为年轻的宇宙探索者，\n\
         需要通过互动AR对象来理解{1}的原理。\n\
         \n\
         要求：\n\
         - 创建3-5个可互动的AR学习对象\n\
         - 使用科幻但温暖的视觉风格\n\
         - 支持触摸交互和语音提示\n\
         - 适合移动设备显示\n\
         - 提供即时学习反馈\n\
         \n\
         让学习{1}成为一次有趣的星际探索之旅！\n",
        subject, concept
    ))
}
