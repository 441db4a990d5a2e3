/// 預設指令；結尾的換行把指令與手冊內容分開
pub const DEFAULT_INSTRUCTION: &str = "根据RustScript手册，用RustScript的语法，实现电力系统潮流计算\n";

pub fn compose_prompt(instruction: &str, content: &str) -> String {
    let mut prompt = String::with_capacity(instruction.len() + content.len());
    prompt.push_str(instruction);
    prompt.push_str(content);
    prompt
}
