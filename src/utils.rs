use crate::api_client::StatRecord;
use crate::regions::COUNTRY_CODE;

pub const ABOUT_TEXT: &str = "Made with <3 by Gopikrishnan K\n\n\
Catch me here: github.com/SuperGops7\n\n\
Powered by the wonderful people at https://api.covid19india.org/";

pub const HELP_HEADER: &str = "The states/UT and their codes are as follows:";

pub fn region_prefix(code: &str, name: &str) -> String {
    if code == COUNTRY_CODE {
        "Across the country,".to_string()
    } else {
        format!("In the state of {},", name)
    }
}

pub fn format_stats_message(prefix: &str, record: &StatRecord) -> String {
    let (date, time) = record
        .last_updated
        .split_once(' ')
        .unwrap_or((record.last_updated.as_str(), ""));

    format!(
        "{} as of {}, on {}, there have been {} cases reported, of which {} people have been reported to be dead, with {} having recovered from the Novel COVID-19.",
        prefix, time, date, record.active, record.deaths, record.recovered
    )
}

pub fn format_emergency(phone: &str) -> String {
    format!("For any emergency, contact: {}", phone)
}
