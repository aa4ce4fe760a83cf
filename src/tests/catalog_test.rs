/*
 * Copyright 2019 Constantin A. <emoji.builder@c1710.de>
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use crate::catalogs::catalog;
use crate::tests::init_logger;

const CATALOG_PATH: &str = "test_files/catalog.json";

// The number of entries expected; the file carries one more entry, which
// has no glyph and is skipped
const EMOJIS: usize = 3;

#[test]
fn catalog_load() {
    init_logger();

    let emojis = catalog::load_catalog_file(CATALOG_PATH).unwrap();

    assert_eq!(EMOJIS, emojis.len());

    let smile = &emojis[0];
    assert_eq!("😄", smile.unicode);
    assert_eq!(
        "smiling face with open mouth and smiling eyes",
        smile.description.as_ref().unwrap()
    );
    assert_eq!(smile.aliases, ["smile"]);
    assert_eq!(smile.tags, ["happy", "joy", "pleased"]);
    assert!(!smile.supports_fitzpatrick);
    assert_eq!("&#128516;", smile.html_decimal());
    assert_eq!("&#x1f604;", smile.html_hexadecimal());

    let boy = &emojis[1];
    assert_eq!("👦", boy.unicode);
    assert!(boy.supports_fitzpatrick);

    let germany = &emojis[2];
    assert_eq!("🇩🇪", germany.unicode);
    assert!(germany.description.is_none());
    assert!(germany.tags.is_empty());
    assert_eq!(vec![0x1f1e9, 0x1f1ea], germany.codepoints());
}
