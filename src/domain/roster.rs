use crate::domain::model::Candidate;

// id doubles as the presidency ordinal, which is why Cleveland appears
// twice (22 and 24) with the same portrait.
const PRESIDENTS: &[(u32, &str, &str, &str)] = &[
    (1, "George Washington", "1789-1797", "portraits/01-george-washington.jpg"),
    (2, "John Adams", "1797-1801", "portraits/02-john-adams.jpg"),
    (3, "Thomas Jefferson", "1801-1809", "portraits/03-thomas-jefferson.jpg"),
    (4, "James Madison", "1809-1817", "portraits/04-james-madison.jpg"),
    (5, "James Monroe", "1817-1825", "portraits/05-james-monroe.jpg"),
    (6, "John Quincy Adams", "1825-1829", "portraits/06-john-quincy-adams.jpg"),
    (7, "Andrew Jackson", "1829-1837", "portraits/07-andrew-jackson.jpg"),
    (8, "Martin Van Buren", "1837-1841", "portraits/08-martin-van-buren.jpg"),
    (9, "William Henry Harrison", "1841", "portraits/09-william-henry-harrison.jpg"),
    (10, "John Tyler", "1841-1845", "portraits/10-john-tyler.jpg"),
    (11, "James K. Polk", "1845-1849", "portraits/11-james-k-polk.jpg"),
    (12, "Zachary Taylor", "1849-1850", "portraits/12-zachary-taylor.jpg"),
    (13, "Millard Fillmore", "1850-1853", "portraits/13-millard-fillmore.jpg"),
    (14, "Franklin Pierce", "1853-1857", "portraits/14-franklin-pierce.jpg"),
    (15, "James Buchanan", "1857-1861", "portraits/15-james-buchanan.jpg"),
    (16, "Abraham Lincoln", "1861-1865", "portraits/16-abraham-lincoln.jpg"),
    (17, "Andrew Johnson", "1865-1869", "portraits/17-andrew-johnson.jpg"),
    (18, "Ulysses S. Grant", "1869-1877", "portraits/18-ulysses-s-grant.jpg"),
    (19, "Rutherford B. Hayes", "1877-1881", "portraits/19-rutherford-b-hayes.jpg"),
    (20, "James A. Garfield", "1881", "portraits/20-james-a-garfield.jpg"),
    (21, "Chester A. Arthur", "1881-1885", "portraits/21-chester-a-arthur.jpg"),
    (22, "Grover Cleveland", "1885-1889", "portraits/22-grover-cleveland.jpg"),
    (23, "Benjamin Harrison", "1889-1893", "portraits/23-benjamin-harrison.jpg"),
    (24, "Grover Cleveland", "1893-1897", "portraits/22-grover-cleveland.jpg"),
    (25, "William McKinley", "1897-1901", "portraits/25-william-mckinley.jpg"),
    (26, "Theodore Roosevelt", "1901-1909", "portraits/26-theodore-roosevelt.jpg"),
    (27, "William Howard Taft", "1909-1913", "portraits/27-william-howard-taft.jpg"),
    (28, "Woodrow Wilson", "1913-1921", "portraits/28-woodrow-wilson.jpg"),
    (29, "Warren G. Harding", "1921-1923", "portraits/29-warren-g-harding.jpg"),
    (30, "Calvin Coolidge", "1923-1929", "portraits/30-calvin-coolidge.jpg"),
    (31, "Herbert Hoover", "1929-1933", "portraits/31-herbert-hoover.jpg"),
    (32, "Franklin D. Roosevelt", "1933-1945", "portraits/32-franklin-d-roosevelt.jpg"),
    (33, "Harry S. Truman", "1945-1953", "portraits/33-harry-s-truman.jpg"),
    (34, "Dwight D. Eisenhower", "1953-1961", "portraits/34-dwight-d-eisenhower.jpg"),
    (35, "John F. Kennedy", "1961-1963", "portraits/35-john-f-kennedy.jpg"),
    (36, "Lyndon B. Johnson", "1963-1969", "portraits/36-lyndon-b-johnson.jpg"),
    (37, "Richard Nixon", "1969-1974", "portraits/37-richard-nixon.jpg"),
    (38, "Gerald Ford", "1974-1977", "portraits/38-gerald-ford.jpg"),
    (39, "Jimmy Carter", "1977-1981", "portraits/39-jimmy-carter.jpg"),
    (40, "Ronald Reagan", "1981-1989", "portraits/40-ronald-reagan.jpg"),
    (41, "George H. W. Bush", "1989-1993", "portraits/41-george-h-w-bush.jpg"),
    (42, "Bill Clinton", "1993-2001", "portraits/42-bill-clinton.jpg"),
    (43, "George W. Bush", "2001-2009", "portraits/43-george-w-bush.jpg"),
    (44, "Barack Obama", "2009-2017", "portraits/44-barack-obama.jpg"),
    (45, "Donald Trump", "2017-2021", "portraits/45-donald-trump.jpg"),
    (46, "Joe Biden", "2021-2025", "portraits/46-joe-biden.jpg"),
];

/// Builds the full built-in roster. Called once at startup; the result is
/// treated as read-only for the life of the process.
pub fn builtin() -> Vec<Candidate> {
    PRESIDENTS
        .iter()
        .map(|&(id, name, years, image)| Candidate {
            id,
            display_name: name.to_string(),
            years_in_service: years.to_string(),
            image_ref: image.to_string(),
            order: id,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_roster_has_unique_ids() {
        let roster = builtin();
        let ids: HashSet<u32> = roster.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), roster.len());
        assert_eq!(roster.len(), 46);
    }

    #[test]
    fn test_builtin_roster_order_matches_id() {
        for candidate in builtin() {
            assert_eq!(candidate.id, candidate.order);
            assert!(!candidate.display_name.is_empty());
            assert!(candidate.image_ref.starts_with("portraits/"));
        }
    }
}
